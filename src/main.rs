use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use softcore_asm::{
    assembler::Assembler, config::AssemblerConfig, hexdump, instrumentation, mif::Mif,
};

#[derive(Parser, Debug)]
#[command(version)]
#[command(about = "Assemble 6502 source into a MIF memory image for the softcore")]
struct Cli {
    #[clap(help = "Assembly source file")]
    input: PathBuf,
    #[clap(help = "Output MIF file [default: <INPUT>.mif]")]
    output: Option<PathBuf>,
    #[clap(long, value_name = "BYTES", default_value_t = 64)]
    #[clap(help = "Number of bytes to print from the start address")]
    dump: usize,
    #[clap(short, long, action = ArgAction::Count)]
    #[clap(help = "Increase log verbosity (-v, -vv, -vvv)")]
    verbose: u8,
    #[clap(long)]
    #[clap(help = "Enable chrome tracing")]
    #[clap(long_help = "Enable chrome tracing which on program exit will generate
a json file to be opened with a chrome tracing compatible
viewer.")]
    trace: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _trace_guard = instrumentation::init(cli.verbose, cli.trace);

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("Unable to read '{}'", cli.input.display()))?;

    let assembler = Assembler::new(AssemblerConfig::default());
    let start_address = assembler.config().start_address;
    let assembly = assembler
        .assemble(&source)
        .with_context(|| format!("Assembly of '{}' failed", cli.input.display()))?;

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension("mif"));
    let mif = Mif::new(assembly.image.as_slice(), start_address);
    let mut file = std::fs::File::create(&output)
        .with_context(|| format!("Unable to create '{}'", output.display()))?;
    mif.write_to(&mut file)
        .with_context(|| format!("Unable to write '{}'", output.display()))?;
    println!("Wrote {}", output.display());

    println!();
    println!("Memory from ${:04X}:", start_address);
    println!(
        "{}",
        hexdump::dump(
            assembly.image.as_slice(),
            start_address as usize,
            cli.dump
        )
    );

    println!();
    println!("Labels:");
    for label in assembly.labels.iter() {
        println!("  {}: ${:04X}", label.name, label.address);
    }

    Ok(())
}
