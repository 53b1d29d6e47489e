fn main() {
    if let Err(err) = hello_gopher::run() {
        std::process::exit(hello_gopher::error::report(&err));
    }
}
