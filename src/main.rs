use plexus::Viewer;

fn main() {
    if let Err(e) = Viewer::new().with_title("plexus").run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
