//! PNG preview export with one flat colour per actor kind

use crate::actors::ActorKind;
use crate::io::error::{GenerationError, Result, invalid_parameter};
use crate::spatial::{Board, Position};
use image::{ImageBuffer, Rgba};
use std::path::Path;

const GRID_LINE: Rgba<u8> = Rgba([24, 24, 28, 255]);

/// Preview colour of a kind
pub const fn kind_color(kind: ActorKind) -> [u8; 4] {
    match kind {
        ActorKind::Empty => [16, 16, 20, 255],
        ActorKind::Dragon | ActorKind::DragonEgg => [200, 40, 40, 255],
        ActorKind::Wizard | ActorKind::BigSlime => [140, 70, 180, 255],
        ActorKind::MineKing | ActorKind::Mine => [230, 140, 30, 255],
        ActorKind::Giant => [120, 90, 60, 255],
        ActorKind::Wall => [110, 110, 110, 255],
        ActorKind::Chest | ActorKind::Mimic | ActorKind::Treasure | ActorKind::Crown => {
            [220, 190, 60, 255]
        }
        ActorKind::Medikit => [80, 200, 90, 255],
        ActorKind::Orb | ActorKind::SpellMakeOrb => [90, 170, 230, 255],
        ActorKind::SpellDisarm | ActorKind::SpellRevealRats | ActorKind::SpellRevealSlimes => {
            [60, 120, 200, 255]
        }
        ActorKind::Gargoyle | ActorKind::Guard => [150, 150, 170, 255],
        ActorKind::Minotaur => [170, 80, 50, 255],
        ActorKind::Gnome | ActorKind::Fidel => [240, 120, 180, 255],
        ActorKind::Decoration => [40, 40, 48, 255],
        _ => [200, 200, 200, 255],
    }
}

/// Export the board as a PNG with `cell_pixels` square cells
///
/// # Errors
///
/// Returns an error if:
/// - `cell_pixels` is smaller than 2
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_board_as_png(board: &Board, output_path: &Path, cell_pixels: u32) -> Result<()> {
    if cell_pixels < 2 {
        return Err(invalid_parameter(
            "cell_pixels",
            &cell_pixels,
            &"cells need at least two pixels to show grid lines",
        ));
    }

    let width = board.width() as u32 * cell_pixels;
    let height = board.height() as u32 * cell_pixels;
    let img = ImageBuffer::from_fn(width, height, |px, py| {
        if px % cell_pixels == 0 || py % cell_pixels == 0 {
            return GRID_LINE;
        }
        let pos = Position::new((px / cell_pixels) as usize, (py / cell_pixels) as usize);
        Rgba(kind_color(board.kind_at(pos)))
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GenerationError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| GenerationError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
