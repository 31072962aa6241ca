use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Fleet;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let fleet = Fleet::from_config(cfg);
    let numbers: Vec<String> = fleet.numbers().iter().map(u32::to_string).collect();

    println!("🚌 Fleet ({} vehicles):", numbers.len());
    println!("{}", numbers.join(", "));
    Ok(())
}
