fn main() -> Result<(), Box<dyn std::error::Error>> {
    ecamap_cli::run()
}
