use skillbridge::adapters::ReqwestHttpClient;
use skillbridge::app::{App, AppMessage};
use skillbridge::cli::{parse_args, run_cli_command};
use skillbridge::cli_output::icons;
use skillbridge::config::ClientConfig;
use skillbridge::gateway::{HttpGateway, LearningGateway};
use skillbridge::logging::init_logging;
use skillbridge::terminal::{setup_panic_hook, TerminalManager};
use skillbridge::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = parse_args(std::env::args());

    let mut config = ClientConfig::from_env();
    if let Some(api_base) = &args.api_base {
        config = config.with_api_base(api_base.clone());
    }
    let log_file = init_logging(&config);
    tracing::info!(
        "Starting skillbridge against {} (log: {:?})",
        config.api_base,
        log_file
    );

    let gateway: Arc<dyn LearningGateway> = Arc::new(HttpGateway::new(
        ReqwestHttpClient::new(),
        config.api_base.clone(),
    ));

    let runtime = tokio::runtime::Runtime::new()?;

    // Non-interactive commands run without touching the terminal
    if let Some(result) = runtime.block_on(run_cli_command(&args.command, gateway.as_ref())) {
        if let Err(e) = result {
            eprintln!("{} {}", icons::FAILURE, e);
            std::process::exit(1);
        }
        return Ok(());
    }

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let mut term_manager = TerminalManager::new()?;
    let mut app = App::new(gateway, config);

    let result = runtime.block_on(async {
        app.start();
        run_app(term_manager.terminal(), &mut app).await
    });

    term_manager.restore()?;
    tracing::info!("skillbridge exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    // Create async event stream for keyboard input
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let tick_rate = app.config.tick_rate;

    loop {
        // Draw the UI only when needed
        if app.needs_redraw {
            terminal.draw(|f| {
                let view = app.view_state();
                ui::render(f, &view);
            })?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(tick_rate);

        tokio::select! {
            // Spinner frames and toast expiry
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key_event(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => {
                        app.mark_dirty();
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::warn!("Terminal event error: {}", e);
                    }
                    None => break,
                }
            }

            // Results of spawned gateway calls
            Some(msg) = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                app.handle_message(msg);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
