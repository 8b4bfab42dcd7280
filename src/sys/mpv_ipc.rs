use anyhow::Result;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

pub fn ipc_socket_path() -> String {
    if cfg!(windows) {
        format!(r"\\.\pipe\tunebar-mpv-{}", std::process::id())
    } else {
        format!("/tmp/tunebar-mpv-{}.sock", std::process::id())
    }
}

/// Pump commands to the mpv IPC socket and forward every response line to
/// `res_tx`. mpv creates the socket after startup, so connection is retried
/// for a short while before giving up.
pub async fn run_ipc_pump(
    socket_path: String,
    mut cmd_rx: UnboundedReceiver<String>,
    res_tx: UnboundedSender<String>,
) -> Result<()> {
    #[cfg(unix)]
    {
        let mut stream = None;
        for _ in 0..20 {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            match tokio::net::UnixStream::connect(&socket_path).await {
                Ok(s) => {
                    stream = Some(s);
                    break;
                }
                Err(_) => continue,
            }
        }

        match stream {
            Some(stream) => {
                log::info!("connected to mpv ipc socket {}", socket_path);
                let (reader, mut writer) = stream.into_split();
                let mut reader = BufReader::new(reader);

                let reader_handle = tokio::spawn(async move {
                    let mut line = String::new();
                    while let Ok(n) = reader.read_line(&mut line).await {
                        if n == 0 {
                            break;
                        }
                        let _ = res_tx.send(line.clone());
                        line.clear();
                    }
                });

                while let Some(cmd) = cmd_rx.recv().await {
                    let _ = writer.write_all(cmd.as_bytes()).await;
                    let _ = writer.flush().await;
                }
                reader_handle.abort();
            }
            None => {
                log::error!("could not connect to mpv ipc socket {}", socket_path);
            }
        }

        let _ = tokio::fs::remove_file(&socket_path).await;
    }

    #[cfg(windows)]
    {
        use tokio::io::split;
        use tokio::net::windows::named_pipe::ClientOptions;

        tokio::time::sleep(std::time::Duration::from_millis(600)).await;
        if let Ok(client) = ClientOptions::new().open(&socket_path) {
            let (reader, mut writer) = split(client);
            let mut reader = BufReader::new(reader);

            let reader_handle = tokio::spawn(async move {
                let mut line = String::new();
                while let Ok(n) = reader.read_line(&mut line).await {
                    if n == 0 {
                        break;
                    }
                    let _ = res_tx.send(line.clone());
                    line.clear();
                }
            });

            while let Some(cmd) = cmd_rx.recv().await {
                let _ = writer.write_all(cmd.as_bytes()).await;
                let _ = writer.flush().await;
            }
            reader_handle.abort();
        } else {
            log::error!("could not open mpv ipc pipe {}", socket_path);
        }
    }

    Ok(())
}
