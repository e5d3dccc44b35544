use std::process::ExitCode;

fn main() -> ExitCode {
    match rust_file_statistics::app::run_word_count_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
