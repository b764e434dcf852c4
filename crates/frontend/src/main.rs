use signup_frontend::{App, AppProps, config, logging};
use std::rc::Rc;

fn main() {
    console_error_panic_hook::set_once();

    let (config, problem) = config::load();
    logging::init(&config.log_level);
    if let Some(e) = problem {
        tracing::warn!(error = %e, "Invalid widget.toml, using defaults");
    }

    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
    })
    .render();
}
