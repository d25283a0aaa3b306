use anyhow::Result;

fn main() -> Result<()> {
    provmap_cli::main_entry()
}
