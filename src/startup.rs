use crate::{
    browser::{self, Opener, Scheduled},
    config::Config,
    dist_server::DistServer,
    error::StartupError,
    shutdown::Shutdown,
    static_files::StaticFiles,
};
use anyhow::Result;

/// Checks the root directory, binds, schedules the browser and hands back a server ready to run.
pub struct Startup {
    config: Config,
    opener: Opener,
}

pub struct Running {
    server: DistServer,
    port: u16,
    browser: Option<Scheduled>,
}

impl Startup {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            opener: browser::system_opener(),
        }
    }

    pub fn with_opener(mut self, opener: Opener) -> Self {
        self.opener = opener;
        self
    }

    pub fn run(self, shutdown: &Shutdown) -> Result<()> {
        self.start()?.serve(shutdown)
    }

    pub fn start(self) -> Result<Running> {
        let Self { config, opener } = self;

        if !config.root_directory.is_dir() {
            println!(
                "Error: {} directory not found!",
                config.root_directory.display()
            );
            println!("Please run \"npm run build\" first to create the dist directory.");

            return Err(StartupError::MissingRootDirectory(config.root_directory).into());
        }

        println!("Serving files from: {}", config.root_directory.display());
        println!("Starting server on {}", config.url());

        let server = DistServer::bind(
            config.port,
            StaticFiles::new(config.root_directory.clone()),
        )?;
        let port = server.port().unwrap_or(config.port);

        let browser = config.open_browser.then(|| {
            browser::launch(
                format!("http://localhost:{port}"),
                config.browser_delay,
                opener,
            )
        });

        Ok(Running {
            server,
            port,
            browser,
        })
    }
}

impl Running {
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Blocks in the accept loop until `shutdown` fires.
    pub fn serve(self, shutdown: &Shutdown) -> Result<()> {
        println!("Server running at http://localhost:{}", self.port);
        println!("Also try: http://127.0.0.1:{}", self.port);
        println!("Press Ctrl+C to stop the server");

        let result = self.server.run(shutdown);

        if let Some(browser) = self.browser {
            browser.cancel();
        }

        if let Some(farewell) = farewell(&result) {
            println!("\n{farewell}");
        }

        result
    }
}

/// Only a clean shutdown says goodbye; failures are reported by the caller.
fn farewell(result: &Result<()>) -> Option<&'static str> {
    result.is_ok().then_some("Server stopped")
}
