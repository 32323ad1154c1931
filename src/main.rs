use json_to_avro::cli;

fn main() -> anyhow::Result<()> {
    cli::CommandLineInterface::load().run()
}
