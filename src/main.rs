use runecodec::inspect;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let results = inspect(std::env::args_os().skip(1));
    if results.is_err() {
        eprintln!("Usage: runecodec [files]");
    }
    results
}
