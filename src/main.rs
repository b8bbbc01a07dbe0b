use log::{debug, error};
use recipe_finder::{
    controller_from_config, to_html, to_text, FinderConfig, RecipeSearch, SearchController,
    SearchError, SearchOutcome, UiState,
};
use std::env;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_state(state: &UiState, html: bool) {
    if let Some(message) = &state.validation_message {
        eprintln!("{}", message);
    }
    if state.is_error_visible() {
        eprintln!("Something went wrong. Please try again.");
    }
    if html {
        println!("{}", to_html(&state.results));
    } else {
        print!("{}", to_text(&state.results));
    }
}

async fn interactive<S: RecipeSearch>(controller: &SearchController<S>, html: bool) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                error!("Failed to read input: {}", e);
                break;
            }
        };

        match line.trim() {
            ":quit" => break,
            ":premium" => {
                controller.show_modal();
                println!("[premium] Upgrade to premium for unlimited recipes. Type :close to dismiss.");
            }
            ":close" => {
                controller.hide_modal();
                debug!("modal hidden");
            }
            raw => {
                controller.submit(raw).await;
                print_state(&controller.snapshot(), html);
            }
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let mut html = false;
    let mut words = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--html" {
            html = true;
        } else {
            words.push(arg);
        }
    }

    let controller = match FinderConfig::load()
        .map_err(SearchError::from)
        .and_then(|config| controller_from_config(&config))
    {
        Ok(controller) => controller,
        Err(e) => {
            error!("{}", e);
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if words.is_empty() {
        interactive(&controller, html).await;
        return ExitCode::SUCCESS;
    }

    let outcome = controller.submit(&words.join(" ")).await;
    print_state(&controller.snapshot(), html);
    match outcome {
        SearchOutcome::Rendered(_) | SearchOutcome::NoResults => ExitCode::SUCCESS,
        _ => ExitCode::FAILURE,
    }
}
