use nu_ansi_term::Color;

fn main() {
    if let Err(e) = epb_cli::run() {
        eprintln!("{} {}", Color::Red.bold().paint("error:"), e);
        std::process::exit(1);
    }
}
