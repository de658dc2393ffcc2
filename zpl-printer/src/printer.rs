//! Printer adapter for sending ZPL data
//!
//! Thermal label printers accept raw TCP printing on port 9100. The
//! protocol is fire-and-forget: the payload is written in one shot and the
//! connection closed, the printer sends no reply that we parse.

use crate::config::PrinterConfig;
use crate::error::{PrintError, PrintResult};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Canned smoke-test label: a few text fields plus a QR code
const TEST_PAGE: &str = "\
^XA
^PW480
^LL320
^LH0,0
^FO50,30
^A0N,40,40
^FDPrinter self test^FS
^FO50,90
^A0N,25,25
^FDZPL over TCP 9100^FS
^FO50,130
^A0N,25,25
^FDConnection OK^FS
^FO50,180
^BQN,2,5
^FDQA,ZPL-PRINTER-TEST^FS
^PQ1
^XZ";

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send a ZPL payload to the printer
    async fn print(&self, zpl: &str) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Network printer (TCP port 9100)
///
/// One socket per call, no pooling or reuse: each send connects, writes the
/// whole payload and closes. The stream is owned by the call, so it is
/// released on every exit path including timeouts.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    addr: SocketAddr,
    send_timeout: Duration,
    probe_timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer
    ///
    /// The host must be an IP address; name resolution is the caller's
    /// concern.
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let addr_str = format!("{}:{}", host, port);
        let addr = addr_str
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", addr_str)))?;

        Ok(Self {
            addr,
            send_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(5),
        })
    }

    /// Create from a socket address string (e.g., "192.168.100.5:9100")
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let addr: SocketAddr = addr
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("Invalid address: {}", addr)))?;

        Ok(Self {
            addr,
            send_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(5),
        })
    }

    /// Create from a resolved transport configuration
    pub fn from_config(config: &PrinterConfig) -> PrintResult<Self> {
        Ok(Self::new(&config.host, config.port)?
            .with_timeout(Duration::from_millis(config.send_timeout_ms))
            .with_probe_timeout(Duration::from_millis(config.probe_timeout_ms)))
    }

    /// Set the connect/send timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.send_timeout = timeout;
        self
    }

    /// Set the connectivity probe timeout
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }

    /// Get the printer address
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Send the canned test page
    ///
    /// Operational smoke test: prints a fixed label exercising text and QR
    /// fields so a technician can confirm the print path end to end.
    pub async fn print_test_page(&self) -> PrintResult<()> {
        self.print(TEST_PAGE).await
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(zpl), fields(addr = %self.addr, zpl_len = zpl.len()))]
    async fn print(&self, zpl: &str) -> PrintResult<()> {
        info!("Connecting to printer");

        let mut stream = tokio::time::timeout(self.send_timeout, TcpStream::connect(self.addr))
            .await
            .map_err(|_| PrintError::Timeout(format!("Connection timeout: {}", self.addr)))?
            .map_err(|e| PrintError::Connection(format!("{}: {}", self.addr, e)))?;

        info!("Connected, sending {} bytes", zpl.len());

        tokio::time::timeout(self.send_timeout, stream.write_all(zpl.as_bytes()))
            .await
            .map_err(|_| PrintError::Timeout(format!("Send timeout: {}", self.addr)))?
            .map_err(|e| {
                PrintError::Io(std::io::Error::new(
                    e.kind(),
                    format!("Write failed: {}", e),
                ))
            })?;

        let _ = stream.shutdown().await;

        info!("Print job sent successfully");
        Ok(())
    }

    #[instrument(fields(addr = %self.addr))]
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(self.probe_timeout, TcpStream::connect(self.addr)).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;
    use tokio::net::TcpListener;

    #[test]
    fn test_network_printer_new() {
        let printer = NetworkPrinter::new("192.168.1.100", 9100).unwrap();
        assert_eq!(printer.addr().port(), 9100);
    }

    #[test]
    fn test_network_printer_from_addr() {
        let printer = NetworkPrinter::from_addr("192.168.1.100:9100").unwrap();
        assert_eq!(printer.addr().port(), 9100);
    }

    #[test]
    fn test_invalid_addr() {
        let result = NetworkPrinter::from_addr("invalid");
        assert!(matches!(result, Err(PrintError::InvalidConfig(_))));
    }

    #[test]
    fn test_from_config() {
        let config = PrinterConfig {
            host: "127.0.0.1".into(),
            port: 9100,
            send_timeout_ms: 2000,
            probe_timeout_ms: 300,
        };
        let printer = NetworkPrinter::from_config(&config).unwrap();
        assert_eq!(printer.addr().port(), 9100);
        assert_eq!(printer.send_timeout, Duration::from_millis(2000));
        assert_eq!(printer.probe_timeout, Duration::from_millis(300));
    }

    #[tokio::test]
    async fn test_print_writes_full_payload() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = Vec::new();
            socket.read_to_end(&mut received).await.unwrap();
            received
        });

        let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
        let payload = "^XA\n^FDhello^FS\n^XZ";
        printer.print(payload).await.unwrap();

        let received = server.await.unwrap();
        assert_eq!(received, payload.as_bytes());
    }

    #[tokio::test]
    async fn test_refused_connection_is_connection_error() {
        // Bind then drop to get a port nothing is listening on
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
        let result = printer.print("^XA^XZ").await;
        assert!(matches!(result, Err(PrintError::Connection(_))));
    }

    #[tokio::test]
    async fn test_stalled_printer_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Accept but never read: kernel buffers fill and the write stalls
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
            drop(socket);
        });

        let printer = NetworkPrinter::new("127.0.0.1", addr.port())
            .unwrap()
            .with_timeout(Duration::from_millis(200));

        // Far larger than the loopback socket buffers
        let payload = "X".repeat(16 * 1024 * 1024);
        let result = printer.print(&payload).await;
        assert!(matches!(result, Err(PrintError::Timeout(_))));

        server.abort();
    }

    #[tokio::test]
    async fn test_is_online() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
        assert!(printer.is_online().await);

        drop(listener);
        let printer = printer.with_probe_timeout(Duration::from_millis(200));
        assert!(!printer.is_online().await);
    }

    #[tokio::test]
    async fn test_print_test_page() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut received = String::new();
            socket.read_to_string(&mut received).await.unwrap();
            received
        });

        let printer = NetworkPrinter::new("127.0.0.1", addr.port()).unwrap();
        printer.print_test_page().await.unwrap();

        let received = server.await.unwrap();
        assert!(received.starts_with("^XA"));
        assert!(received.ends_with("^XZ"));
        assert!(received.contains("^BQN,2,5"));
    }
}
