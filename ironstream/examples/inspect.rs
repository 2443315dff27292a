//! Example inspecting the leading bytes of a binary file.
//!
//! Run with: `cargo run --example inspect -- <path>`
//!
//! Without an argument a small demo file is written first, and the final
//! oversized read demonstrates the bounds error plus stack-trace rendering.

use ironstream::prelude::*;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = match std::env::args().nth(1) {
        Some(path) => std::path::PathBuf::from(path),
        None => {
            let path = std::env::temp_dir().join("ironstream-inspect.bin");
            let mut sink = Stream::sink(FileSink::create(&path)?);
            sink.write(&0x4B53_4E49u32)?;
            sink.write(&2u16)?;
            sink.write(&0xDEAD_BEEFu32)?;
            path
        }
    };

    let mut stream = Stream::new(FileSource::open(&path)?)?;
    println!("{}: {} bytes", path.display(), stream.size());

    let magic: u32 = stream.read()?;
    let version: u16 = stream.read()?;
    println!("magic={magic:#010x} version={version}");

    match stream.read::<u64>() {
        Ok(tail) => println!("tail={tail:#018x}"),
        Err(err) => {
            let traced = Traced::new(err);
            eprintln!("tail read failed: {traced}");
            traced.print_stack_trace(&mut std::io::stderr())?;
        }
    }

    Ok(())
}
