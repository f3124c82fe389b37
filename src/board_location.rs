use crate::errors::GameError;

/// A (file, rank) coordinate pair, each axis 0-7.
pub type BoardLocation = (i8, i8);

/// Returns true if the location lies inside the 8x8 board.
pub fn is_on_board(x: &BoardLocation) -> bool {
    (0..8).contains(&x.0) && (0..8).contains(&x.1)
}

/// Moves a board location by a file and rank offset.
///
/// # Arguments
///
/// * `x` - The current board location.
/// * `d_file` - The file offset.
/// * `d_rank` - The rank offset.
///
/// # Returns
///
/// * `Result<BoardLocation, GameError>` - The new location if it stays on the
///   board, otherwise `GameError::InvalidSquare`.
pub fn offset_location(
    x: &BoardLocation,
    d_file: i8,
    d_rank: i8,
) -> Result<BoardLocation, GameError> {
    let y: BoardLocation = (x.0 + d_file, x.1 + d_rank);
    if is_on_board(&y) {
        Ok(y)
    } else {
        Err(GameError::InvalidSquare(y))
    }
}
