use std::io::Write;

use crate::errors::AppError;
use crate::routes::Route;
use crate::views::overview::OVERVIEW_TILES;

pub fn render(out: &mut impl Write) -> Result<(), AppError> {
    writeln!(out, "Overview")?;
    for tile in OVERVIEW_TILES {
        writeln!(out, "  {:<18} {:>5}  ({})", tile.title, tile.value, tile.note)?;
    }
    writeln!(out)?;
    for route in [Route::HrDashboard, Route::CandidateDashboard] {
        writeln!(out, "  {:<22} {}", route.path(), route.command())?;
    }
    Ok(())
}
