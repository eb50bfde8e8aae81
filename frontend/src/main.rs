use launcher::cli::{self, Action};
use launcher::slideshow::Slideshow;
use launcher::style::BackgroundMode;
use launcher::{debug, logging, Error, Settings};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = match cli::handle_arguments(std::env::args_os()) {
        Ok(Action::Run(options)) => options,
        Ok(Action::Quit) => return ExitCode::SUCCESS,
        Err(e) => {
            println!("{}", e);
            cli::print_usage();
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logging::init(options.debug) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let config_path = match cli::resolve_config_path(&options) {
        Ok(p) => p,
        Err(Error::NoConfigFile) => {
            log::error!("Fatal Error: No config file found");
            cli::print_usage();
            return ExitCode::FAILURE;
        }
        Err(e) => {
            log::error!("Fatal Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("Using config file {}", config_path.display());

    let mut settings = match Settings::load(&config_path) {
        Ok(s) => s,
        Err(e) => {
            log::error!("Fatal Error: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug::debug_settings(&settings);
    debug::debug_menu_entries(&settings.menus);

    if settings.background_mode == BackgroundMode::Slideshow {
        prepare_slideshow(&mut settings);
    }

    match settings.default_menu_index() {
        Some(i) => log::info!(
            "Loaded {} menus from {}, starting in \"{}\"",
            settings.num_menus(),
            config_path.display(),
            settings.menus[i].name
        ),
        None => {
            log::error!("Fatal Error: No valid menus found in {}", config_path.display());
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}

/// Falls back to a plain background when the slideshow has nothing to show.
fn prepare_slideshow(settings: &mut Settings) {
    let Some(dir) = settings.slideshow_directory.clone() else {
        log::warn!("Slideshow mode needs a slideshow directory, using background color");
        settings.background_mode = BackgroundMode::Color;
        return;
    };
    let slideshow = Slideshow::scan(Path::new(&dir));
    debug::debug_slideshow(&slideshow, &dir);
    if slideshow.is_empty() {
        log::warn!("No images found in {}, using background color", dir);
        settings.background_mode = BackgroundMode::Color;
    }
}
