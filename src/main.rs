mod command;
mod emulator;
mod input;
mod mapping;
mod scanner;
mod store;
mod wizard;

use clap::Parser;
use input::evdev_source::EvdevSource;
use store::CommandStore;

#[derive(Parser)]
#[command(name = "padmap", version)]
#[command(about = "Map a generic game controller onto an Xbox pad and drive xboxdrv with it")]
#[command(group(
    clap::ArgGroup::new("mode")
        .required(true)
        .args(["setup", "emulate", "identify"])
))]
struct Cli {
    /// Detect a controller, map its buttons and axes, save the result
    #[arg(long)]
    setup: bool,

    /// Load the saved mapping, detect the controller and start xboxdrv
    #[arg(long)]
    emulate: bool,

    /// Detect a controller and print its device path
    #[arg(long)]
    identify: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let store = CommandStore::at_default_path();

    if cli.setup {
        run_setup(&store)
    } else if cli.emulate {
        emulator::run_emulate(&store, || Ok(scanner::detect_gamepad()?), emulator::spawn)
    } else {
        run_identify()
    }
}

fn run_setup(store: &CommandStore) -> anyhow::Result<()> {
    let path = scanner::detect_gamepad()?;
    let mut source = EvdevSource::open(&path)?;

    let (buttons, axes) = wizard::run_session(&mut source)?;
    if buttons.is_empty() && axes.is_empty() {
        log::warn!("Nothing was mapped; the saved command will only mimic an idle pad");
    }

    let command = command::build(&buttons, &axes);
    println!();
    println!("Built command:");
    println!("  {}", command);

    store.save(&command)?;
    println!("Saved to {}. Run padmap --emulate to use it.", store.path().display());
    Ok(())
}

fn run_identify() -> anyhow::Result<()> {
    let path = scanner::detect_gamepad()?;
    println!("{}", path.display());
    Ok(())
}
