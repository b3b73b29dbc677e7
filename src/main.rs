use transcode::transcode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let stdout = std::io::stdout();
    let results = transcode(std::env::args_os().skip(1), &mut stdout.lock());
    if results.is_err() {
        eprintln!("Usage: transcode [files]");
    }
    results
}
