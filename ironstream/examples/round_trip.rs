//! Example round-tripping a typed record through an in-memory channel.
//!
//! Run with: `cargo run --example round_trip`

use ironstream::prelude::*;

/// A small fixed-layout record: 17 bytes on the wire.
#[derive(Debug, PartialEq)]
struct Quote {
    instrument: u32,
    price: i64,
    size: u32,
    flags: u8,
}

impl FromStream for Quote {
    fn from_stream<C: ReadChannel>(stream: &mut Stream<C>) -> Result<Self> {
        Ok(Self {
            instrument: stream.read()?,
            price: stream.read()?,
            size: stream.read()?,
            flags: stream.read()?,
        })
    }
}

impl ToStream for Quote {
    fn to_stream<C: WriteChannel>(&self, stream: &mut Stream<C>) -> Result<()> {
        stream.write(&self.instrument)?;
        stream.write(&self.price)?;
        stream.write(&self.size)?;
        stream.write(&self.flags)
    }
}

fn main() -> Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let quote = Quote {
        instrument: 101,
        price: 150_500,
        size: 200,
        flags: 0b1,
    };

    // Reverse order on both paths composes to the identity on a round trip.
    let channel = MemoryChannel::with_data(vec![0u8; 17]);
    let mut stream = Stream::with_byte_order(channel, ByteOrder::Reverse, ByteOrder::Reverse)?;

    stream.write(&quote)?;
    println!("encoded {} bytes", stream.write_position()?);

    let decoded: Quote = stream.read()?;
    println!("decoded: {:?}", decoded);
    assert_eq!(decoded, quote);

    Ok(())
}
