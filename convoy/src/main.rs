use clap::Parser;
use convoy::app::ConvoyApp;

fn main() {
    env_logger::init();
    let args = ConvoyApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running convoy: {e}");
            std::process::exit(1);
        }
    }
}
