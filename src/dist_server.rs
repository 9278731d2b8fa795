use crate::{error::StartupError, no_cache, shutdown::Shutdown, static_files::StaticFiles};
use anyhow::Result;
use std::{
    net::{Ipv4Addr, SocketAddrV4},
    time::Duration,
};
use tiny_http::{Request, Server};

/// How often the accept loop checks for shutdown.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct DistServer {
    server: Server,
    files: StaticFiles,
}

impl DistServer {
    /// Binds on all interfaces. Port 0 picks a free port.
    pub fn bind(port: u16, files: StaticFiles) -> Result<Self, StartupError> {
        let server = Server::http(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, port)).map_err(
            |error| StartupError::Bind {
                port,
                reason: error.to_string(),
            },
        )?;

        Ok(Self { server, files })
    }

    pub fn port(&self) -> Option<u16> {
        self.server.server_addr().to_ip().map(|addr| addr.port())
    }

    pub fn run(&self, shutdown: &Shutdown) -> Result<()> {
        while !shutdown.is_triggered() {
            let Some(request) = self.server.recv_timeout(POLL_INTERVAL)? else {
                continue;
            };

            if let Err(error) = self.handle(request) {
                println!("Error while processing request: {error}");
            }
        }

        Ok(())
    }

    fn handle(&self, request: Request) -> Result<()> {
        let response = no_cache::append(self.files.respond(request.method(), request.url()));

        println!(
            "{} \"{} {}\" {}",
            request
                .remote_addr()
                .map_or_else(|| "-".into(), |addr| addr.to_string()),
            request.method(),
            request.url(),
            response.status_code().0,
        );

        request.respond(response)?;

        Ok(())
    }
}
