use clap::Parser;
use ntm::loader::MachineLoader;
use ntm::report::Report;
use ntm::Simulator;
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// The machine description file to simulate
    machine: PathBuf,

    /// The file containing the input string
    input: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    let machine = match MachineLoader::load_machine(&cli.machine) {
        Ok(machine) => machine,
        Err(e) => {
            eprintln!("Error loading machine description: {}", e);
            std::process::exit(1);
        }
    };

    let input = match MachineLoader::load_input(&cli.input) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error loading input string: {}", e);
            std::process::exit(1);
        }
    };

    match Simulator::default().run(&machine, &input) {
        Ok(result) => println!("{}", Report::new(&result)),
        Err(e) => {
            eprintln!("Error simulating {}: {}", machine.name, e);
            std::process::exit(1);
        }
    }
}
