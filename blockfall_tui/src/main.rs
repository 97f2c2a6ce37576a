mod application;
mod game_screen;
mod input;
mod keybinds;
mod palette;

use std::io;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Custom starting seed, given as a 64-bit integer.
    /// This determines the sequence of pieces spawned and makes it possible
    /// to replay a round with the same pieces if the same seed is entered.
    /// Example: `./blockfall_tui --seed=42` or `./blockfall_tui -s 42`.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Use vim-style movement keys (h/j/k/l) instead of the arrow keys.
    #[arg(long)]
    vim_keys: bool,
    /// Render tiles with the terminal's basic 16-color palette instead of
    /// full RGB, for terminals without truecolor support.
    #[arg(long)]
    basic_colors: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Read commandline arguments.
    let args = Args::parse();

    // Initialize application.
    let stdout = io::BufWriter::new(io::stdout());
    let mut app =
        application::Application::new(stdout, args.seed, args.vim_keys, args.basic_colors);

    // Catch panics and write the error to stderr after forcefully resetting
    // terminal state. Although `Application` restores the terminal on drop,
    // it appears to sometimes not do so before we can meaningfully print an
    // error visible to the user.
    std::panic::set_hook(Box::new(|panic_info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ =
            crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::style::ResetColor);
        let _ = crossterm::ExecutableCommand::execute(&mut io::stderr(), crossterm::cursor::Show);
        let _ = crossterm::ExecutableCommand::execute(
            &mut io::stderr(),
            crossterm::terminal::LeaveAlternateScreen,
        );

        eprint!("{panic_info}\n\n");
    }));

    // Run main application.
    app.run()?;

    Ok(())
}
