use canvas_tool::app::CanvasTool;
use canvas_tool::logging;
use canvas_tool::settings::ToolSettings;
use gpui::*;
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    let loaded = ToolSettings::load();
    logging::init(loaded.as_ref().ok().and_then(|s| s.log_filter.as_deref()))?;

    let settings = loaded.unwrap_or_else(|e| {
        warn!("Failed to load settings, using defaults: {}", e);
        ToolSettings::default()
    });
    info!(
        width = settings.window_width,
        height = settings.window_height,
        "Starting canvas tool"
    );

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(
            None,
            size(px(settings.window_width), px(settings.window_height)),
            cx,
        );
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(settings.title.clone().into()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let opened = cx.open_window(options, |window, cx| {
            cx.new(|cx| CanvasTool::new(settings.clone(), window, cx))
        });
        if let Err(e) = opened {
            error!("Failed to open window: {:#}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}
