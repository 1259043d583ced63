// ScreenAPI landing page - static site CLI (ssr) or browser entry point (csr)

#[cfg(feature = "ssr")]
mod cli;

#[cfg(feature = "ssr")]
fn main() -> std::process::ExitCode {
    cli::run()
}

#[cfg(all(feature = "csr", not(feature = "ssr")))]
fn main() {
    console_error_panic_hook::set_once();
    screenapi_landing::mount();
}
