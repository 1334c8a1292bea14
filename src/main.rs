pub mod cli;
pub mod codegen;
pub mod compose;
pub mod ir;
pub mod names;

/// Quick eyeball check: print a small dispatch family to stdout.
#[allow(unused)]
fn preview_small_family() -> anyhow::Result<()> {
    let cfg = codegen::FamilyConfig {
        max_arity: 3,
        ..codegen::FamilyConfig::new(codegen::Role::Dispatch)
    };
    print!("{}", codegen::generate_family(&cfg)?);
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // preview_small_family()?;
    let command_line_interface = cli::CommandLineInterface::load();
    command_line_interface.run()
}
