use std::{io, net::SocketAddr, path::Path, time::Duration};

use color_eyre::{eyre::WrapErr, Result};
use native_tls::Identity;
use tokio::{
    net::{TcpListener, TcpStream},
    sync::mpsc,
};
use tokio_native_tls::{TlsAcceptor, TlsStream};

/// How long a client gets to finish the TLS handshake.
pub const HANDSHAKE_TIMEOUT: Duration = Duration::from_secs(10);

const PENDING_CONNECTIONS: usize = 64;

type Accepted = (TlsStream<TcpStream>, SocketAddr);

/// Writes a self-signed `localhost` certificate and key unless both files
/// already exist. Returns whether new files were written.
pub fn ensure_self_signed(cert_path: &Path, key_path: &Path) -> Result<bool> {
    if cert_path.exists() && key_path.exists() {
        return Ok(false);
    }

    for dir in [cert_path.parent(), key_path.parent()].into_iter().flatten() {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("could not create {}", dir.display()))?;
    }

    let generated = rcgen::generate_simple_self_signed(vec![
        "localhost".to_string(),
        "127.0.0.1".to_string(),
    ])
    .wrap_err("could not generate a self-signed certificate")?;

    std::fs::write(key_path, generated.key_pair.serialize_pem())
        .wrap_err_with(|| format!("could not write private key {}", key_path.display()))?;
    std::fs::write(cert_path, generated.cert.pem())
        .wrap_err_with(|| format!("could not write certificate {}", cert_path.display()))?;

    tracing::info!(
        "generated self-signed certificate in {}",
        cert_path.parent().unwrap_or(cert_path).display()
    );
    Ok(true)
}

/// Builds a TLS acceptor from a PEM certificate chain and PKCS#8 PEM key.
pub fn load_acceptor(cert_path: &Path, key_path: &Path) -> Result<TlsAcceptor> {
    let cert = std::fs::read(cert_path)
        .wrap_err_with(|| format!("could not read certificate {}", cert_path.display()))?;
    let key = std::fs::read(key_path)
        .wrap_err_with(|| format!("could not read private key {}", key_path.display()))?;

    let identity = Identity::from_pkcs8(&cert, &key).wrap_err("invalid certificate or key")?;
    let acceptor = native_tls::TlsAcceptor::builder(identity)
        .build()
        .wrap_err("could not build TLS acceptor")?;

    Ok(TlsAcceptor::from(acceptor))
}

/// Listener handing axum connections that already completed the TLS handshake.
///
/// A background task accepts TCP connections and runs every handshake on its
/// own task, so a client that never finishes one only costs its own slot
/// until [`HANDSHAKE_TIMEOUT`] drops it.
pub struct TlsListener {
    incoming: mpsc::Receiver<Accepted>,
    local_addr: SocketAddr,
}

impl TlsListener {
    pub fn new(listener: TcpListener, acceptor: TlsAcceptor) -> io::Result<Self> {
        Self::with_handshake_timeout(listener, acceptor, HANDSHAKE_TIMEOUT)
    }

    pub fn with_handshake_timeout(
        listener: TcpListener,
        acceptor: TlsAcceptor,
        handshake_timeout: Duration,
    ) -> io::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (tx, incoming) = mpsc::channel(PENDING_CONNECTIONS);

        tokio::spawn(accept_loop(listener, acceptor, handshake_timeout, tx));

        Ok(Self {
            incoming,
            local_addr,
        })
    }
}

async fn accept_loop(
    listener: TcpListener,
    acceptor: TlsAcceptor,
    handshake_timeout: Duration,
    tx: mpsc::Sender<Accepted>,
) {
    while !tx.is_closed() {
        let (stream, addr) = match listener.accept().await {
            Ok(conn) => conn,
            Err(err) => {
                tracing::error!("failed to accept connection: {err}");
                tokio::time::sleep(Duration::from_secs(1)).await;
                continue;
            }
        };

        let acceptor = acceptor.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            match tokio::time::timeout(handshake_timeout, acceptor.accept(stream)).await {
                Ok(Ok(tls)) => {
                    // The receiver is gone once the server shuts down.
                    let _ = tx.send((tls, addr)).await;
                }
                Ok(Err(err)) => tracing::warn!("TLS handshake with {addr} failed: {err}"),
                Err(_) => tracing::warn!("TLS handshake with {addr} timed out"),
            }
        });
    }
}

impl axum::serve::Listener for TlsListener {
    type Io = TlsStream<TcpStream>;
    type Addr = SocketAddr;

    async fn accept(&mut self) -> (Self::Io, Self::Addr) {
        match self.incoming.recv().await {
            Some(conn) => conn,
            None => {
                tracing::error!("TLS accept loop stopped");
                std::future::pending().await
            }
        }
    }

    fn local_addr(&self) -> io::Result<Self::Addr> {
        Ok(self.local_addr)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use axum::serve::Listener;
    use tokio::io::AsyncWriteExt;

    use super::*;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("card_clash_tls_{}", ulid::Ulid::new()))
    }

    fn test_acceptor(dir: &Path) -> TlsAcceptor {
        let cert = dir.join("cert.pem");
        let key = dir.join("key.pem");
        ensure_self_signed(&cert, &key).unwrap();
        load_acceptor(&cert, &key).unwrap()
    }

    async fn tls_client(addr: SocketAddr) -> tokio_native_tls::TlsStream<TcpStream> {
        let connector = native_tls::TlsConnector::builder()
            .danger_accept_invalid_certs(true)
            .build()
            .unwrap();
        let tcp = TcpStream::connect(addr).await.unwrap();
        tokio_native_tls::TlsConnector::from(connector)
            .connect("localhost", tcp)
            .await
            .unwrap()
    }

    #[test]
    fn generates_certificate_only_when_missing() {
        let dir = scratch_dir();
        let cert = dir.join("certs").join("localhost-cert.pem");
        let key = dir.join("certs").join("localhost-key.pem");

        assert!(ensure_self_signed(&cert, &key).unwrap());
        let written = std::fs::read_to_string(&cert).unwrap();
        assert!(written.contains("BEGIN CERTIFICATE"));
        assert!(std::fs::read_to_string(&key)
            .unwrap()
            .contains("BEGIN PRIVATE KEY"));

        assert!(!ensure_self_signed(&cert, &key).unwrap());
        assert_eq!(std::fs::read_to_string(&cert).unwrap(), written);
        assert!(load_acceptor(&cert, &key).is_ok());
    }

    #[test]
    fn missing_files_fail_to_load() {
        let dir = scratch_dir();
        assert!(load_acceptor(&dir.join("cert.pem"), &dir.join("key.pem")).is_err());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn silent_client_does_not_block_other_connections() {
        let dir = scratch_dir();
        let acceptor = test_acceptor(&dir);
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mut listener = TlsListener::new(tcp, acceptor).unwrap();
        let addr = listener.local_addr().unwrap();

        // Connects but never starts a handshake.
        let _silent = TcpStream::connect(addr).await.unwrap();

        let client = tokio::spawn(async move {
            let mut stream = tls_client(addr).await;
            stream.write_all(b"ping").await.unwrap();
        });

        let accepted = tokio::time::timeout(Duration::from_secs(5), listener.accept()).await;
        assert!(accepted.is_ok(), "healthy client was not accepted");
        client.await.unwrap();
    }

    #[tokio::test]
    async fn stalled_handshake_times_out() {
        let dir = scratch_dir();
        let acceptor = test_acceptor(&dir);
        let tcp = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let listener =
            TlsListener::with_handshake_timeout(tcp, acceptor, Duration::from_millis(100))
                .unwrap();
        let addr = listener.local_addr().unwrap();

        let mut silent = TcpStream::connect(addr).await.unwrap();
        let mut buf = [0u8; 1];
        let read = tokio::time::timeout(
            Duration::from_secs(5),
            tokio::io::AsyncReadExt::read(&mut silent, &mut buf),
        )
        .await;

        // The server side hangs up: EOF or a reset, but not a hang.
        assert!(matches!(read, Ok(Ok(0)) | Ok(Err(_))));
    }
}
