use clap::{ArgAction, Parser, ValueEnum};
use std::path::{Path, PathBuf};

use doodlepad::config::Config;
use doodlepad::export::{self, ExportFormat};
use doodlepad::input::{PointerEvent, Tool};
use doodlepad::panel::App;
use doodlepad::ui::LogNotifier;

#[derive(Parser, Debug)]
#[command(name = "doodlepad")]
#[command(version, about = "Children's paint and tracing pad")]
struct Cli {
    /// Print all drawing lessons and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_lessons: bool,

    /// Print one drawing lesson by number (1-10) and exit
    #[arg(long, value_name = "N")]
    lesson: Option<usize>,

    /// Draw the sample picture and export it; omit PATH to write into the
    /// configured export directory with a generated filename
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    export: Option<Option<PathBuf>>,

    /// Export format; defaults to the path's extension, then png
    #[arg(long, value_enum, value_name = "FORMAT")]
    format: Option<FormatArg>,

    /// Use an alternate config file instead of ~/.config/doodlepad/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum FormatArg {
    Png,
    Jpeg,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Png => ExportFormat::Png,
            FormatArg::Jpeg => ExportFormat::Jpeg,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let mut notifier = LogNotifier;
    let app = App::new(&config, &mut notifier);

    if cli.list_lessons {
        for (i, lesson) in app.lessons.lessons().iter().enumerate() {
            println!("{}. {}", i + 1, lesson.title);
            println!("   {}", lesson.body);
            println!();
        }
        println!("{}", doodlepad::panel::lessons::CLOSING_NOTE);
        return Ok(());
    }

    if let Some(number) = cli.lesson {
        let lesson = app
            .lessons
            .lesson(number)
            .ok_or_else(|| anyhow::anyhow!("No lesson {number}; pick 1-10"))?;
        println!("{}. {}", number, lesson.title);
        println!("{}", lesson.body);
        return Ok(());
    }

    if let Some(explicit) = cli.export {
        let format = cli
            .format
            .map(ExportFormat::from)
            .or_else(|| explicit.as_ref().and_then(|p| ExportFormat::for_path(p)))
            .unwrap_or(ExportFormat::Png);
        let path = match explicit {
            Some(path) => path,
            // No PATH given: configured directory + generated filename
            None => {
                let dir = config
                    .export
                    .directory
                    .clone()
                    .unwrap_or_else(|| PathBuf::from("."));
                dir.join(export::default_filename(
                    &config.export.filename_template,
                    format,
                ))
            }
        };
        export_sample(app, &path, format, config.export.jpeg_quality)?;
        return Ok(());
    }

    // No flags: show usage
    println!("doodlepad: Children's paint and tracing pad");
    println!();
    println!("Usage:");
    println!("  doodlepad --list-lessons       Print the drawing curriculum");
    println!("  doodlepad --lesson <N>         Print one lesson (1-10)");
    println!("  doodlepad --export [PATH]      Export the sample picture; without");
    println!("                                 PATH the configured export directory");
    println!("                                 and filename template are used");
    println!("  doodlepad --format <FORMAT>    png, jpeg, or pdf");
    println!("  doodlepad --config <PATH>      Use an alternate config file");
    println!("  doodlepad --help               Show help");
    println!();
    println!("The interactive canvas needs a GUI shell; this binary exercises");
    println!("the drawing model headlessly.");

    Ok(())
}

/// Draws the sample house picture through the real event path and saves it.
fn export_sample(
    mut app: App,
    path: &Path,
    format: ExportFormat,
    jpeg_quality: u8,
) -> anyhow::Result<()> {
    let gestures: [(Tool, doodlepad::draw::Color, (i32, i32), (i32, i32)); 5] = [
        // House body, roof line, door, sun, and the ground
        (Tool::Rectangle, doodlepad::draw::ORANGE, (250, 300), (550, 500)),
        (Tool::Line, doodlepad::draw::RED, (250, 300), (400, 200)),
        (Tool::Line, doodlepad::draw::RED, (400, 200), (550, 300)),
        (Tool::Circle, doodlepad::draw::YELLOW, (620, 60), (720, 160)),
        (Tool::Brush, doodlepad::draw::GREEN, (0, 520), (799, 520)),
    ];
    for (tool, color, start, end) in gestures {
        app.paint.input.tools.active_tool = tool;
        app.paint.input.tools.color = color;
        app.paint.handle_event(PointerEvent::Down {
            x: start.0,
            y: start.1,
        });
        app.paint.handle_event(PointerEvent::Drag {
            x: (start.0 + end.0) / 2,
            y: (start.1 + end.1) / 2,
        });
        app.paint.handle_event(PointerEvent::Up { x: end.0, y: end.1 });
    }

    let written = export::save_canvas(app.paint.surface(), path, format, jpeg_quality)?;
    println!("Exported sample picture to {}", written.display());
    Ok(())
}
