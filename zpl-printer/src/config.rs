//! Printer transport configuration

/// Resolved transport configuration for the network printer
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Printer IP address
    pub host: String,
    /// Raw printing port, 9100 on most thermal printers
    pub port: u16,
    /// Connect + send timeout for print jobs
    pub send_timeout_ms: u64,
    /// Connect timeout for connectivity probes
    pub probe_timeout_ms: u64,
}

impl PrinterConfig {
    pub fn from_env() -> Self {
        Self {
            host: std::env::var("PRINTER_HOST").unwrap_or_else(|_| "192.168.100.5".into()),
            port: std::env::var("PRINTER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(9100),
            send_timeout_ms: std::env::var("PRINTER_SEND_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10_000),
            probe_timeout_ms: std::env::var("PRINTER_PROBE_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5_000),
        }
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            host: "192.168.100.5".into(),
            port: 9100,
            send_timeout_ms: 10_000,
            probe_timeout_ms: 5_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrinterConfig::default();
        assert_eq!(config.port, 9100);
        assert_eq!(config.send_timeout_ms, 10_000);
        assert_eq!(config.probe_timeout_ms, 5_000);
    }
}
