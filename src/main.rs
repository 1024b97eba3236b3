use anyhow::{Context, Result};
use boardtext::{Color, ColorCodes, DisplaySettings};
use clap::parser::ValueSource;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use shakmaty::fen::Fen;
use tracing::info;

const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn bool_flag(id: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("BOOL")
        .help(help)
        .action(ArgAction::Set)
        .value_parser(value_parser!(bool))
        .default_value("true")
}

fn code_flag(id: &'static str, help: &'static str, default: &'static str) -> Arg {
    Arg::new(id)
        .long(id)
        .value_name("SGR")
        .help(help)
        .value_parser(value_parser!(u8))
        .default_value(default)
}

fn command() -> Command {
    Command::new("boardtext")
        .version("0.1.0")
        .about("Prints a chess position as an aligned, optionally colored text board")
        .arg(
            Arg::new("fen")
                .long("fen")
                .value_name("FEN")
                .help("Position to display")
                .default_value(START_FEN),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("JSON display settings; flags given on the command line override them"),
        )
        .arg(
            Arg::new("top-color")
                .long("top-color")
                .value_name("COLOR")
                .help("Side displayed at the top of the board")
                .default_value("black")
                .value_parser(["black", "white"]),
        )
        .arg(bool_flag("unicode", "Use Unicode symbols to display pieces"))
        .arg(bool_flag("colorful-pieces", "Use colors to display pieces"))
        .arg(code_flag("piece-black-color", "SGR parameter for black pieces", "34"))
        .arg(code_flag("piece-white-color", "SGR parameter for white pieces", "31"))
        .arg(bool_flag("colorful-board", "Use colors to display the board"))
        .arg(code_flag("square-black-color", "SGR parameter for black squares", "40"))
        .arg(code_flag("square-white-color", "SGR parameter for white squares", "47"))
        .arg(bool_flag("wide", "Display the board wide"))
}

fn from_command_line(matches: &ArgMatches, id: &str) -> bool {
    matches.value_source(id) == Some(ValueSource::CommandLine)
}

/// Flag defaults when no settings file is given, otherwise the file with explicit flags on top.
fn display_settings(matches: &ArgMatches) -> Result<DisplaySettings> {
    let (mut settings, only_explicit) = match matches.get_one::<String>("config") {
        Some(path) => (DisplaySettings::load(path)?, true),
        None => (DisplaySettings::default(), false),
    };
    let wanted = |id: &str| !only_explicit || from_command_line(matches, id);

    if wanted("top-color") {
        if let Some(color) = matches.get_one::<String>("top-color") {
            settings.top_color = color.parse()?;
        }
    }
    for (id, field) in [
        ("unicode", &mut settings.unicode),
        ("colorful-pieces", &mut settings.colorful_pieces),
        ("colorful-board", &mut settings.colorful_board),
        ("wide", &mut settings.wide),
    ] {
        if wanted(id) {
            if let Some(&value) = matches.get_one::<bool>(id) {
                *field = value;
            }
        }
    }
    for (id, field) in [
        ("piece-black-color", &mut settings.piece_colors.black),
        ("piece-white-color", &mut settings.piece_colors.white),
        ("square-black-color", &mut settings.square_colors.black),
        ("square-white-color", &mut settings.square_colors.white),
    ] {
        if wanted(id) {
            if let Some(&value) = matches.get_one::<u8>(id) {
                *field = value;
            }
        }
    }

    Ok(settings)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let matches = command().get_matches();
    let settings = display_settings(&matches)?;

    let fen = matches.get_one::<String>("fen").map(String::as_str).unwrap_or(START_FEN);
    let setup = Fen::from_ascii(fen.as_bytes())
        .with_context(|| format!("Failed to decode the board: {}", fen))?
        .into_setup();
    info!(fen, top_color = %settings.top_color, "rendering position");

    let config = settings.render_config();
    println!("{}", config.render(&setup.board));
    println!("{}> ", Color::from(setup.turn));

    Ok(())
}
