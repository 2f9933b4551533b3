/// One Mahjong tile: the local identifier paired with its Wikimedia Commons
/// filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: String,
    pub file_name: String,
}

impl Tile {
    fn new(id: String, file_name: String) -> Self {
        Tile { id, file_name }
    }
}

/// Builds the full 42-tile set in a fixed order: characters, dots, bamboo,
/// winds, dragons, then flowers and seasons.
pub fn all() -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(42);

    // Numbered suits: characters (man), dots (pin), bamboo (sou)
    for (suit, prefix) in [("m", "MJw"), ("p", "MJt"), ("s", "MJs")] {
        for rank in 1..=9 {
            tiles.push(Tile::new(
                format!("{}{}", suit, rank),
                format!("{}{}-.svg", prefix, rank),
            ));
        }
    }

    // Winds: east, south, west, north
    for wind in 1..=4 {
        tiles.push(Tile::new(format!("z{}", wind), format!("MJf{}-.svg", wind)));
    }

    // Dragons: the z-numbering (white, green, red) runs opposite to Commons'
    // d-numbering
    for (id, file_name) in [("z5", "MJd3-.svg"), ("z6", "MJd2-.svg"), ("z7", "MJd1-.svg")] {
        tiles.push(Tile::new(id.to_string(), file_name.to_string()));
    }

    // Flowers and seasons: plum, orchid, bamboo, chrysanthemum, then
    // spring, summer, autumn, winter
    for (id, file_name) in [
        ("f1", "MJh3-.svg"),
        ("f2", "MJh4-.svg"),
        ("f3", "MJh8-.svg"),
        ("f4", "MJh7-.svg"),
        ("f5", "MJh1-.svg"),
        ("f6", "MJh2-.svg"),
        ("f7", "MJh5-.svg"),
        ("f8", "MJh6-.svg"),
    ] {
        tiles.push(Tile::new(id.to_string(), file_name.to_string()));
    }

    tiles
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builds_all_42_tiles() {
        assert_eq!(all().len(), 42);
    }

    #[test]
    fn test_identifier_set_is_complete() {
        let ids: HashSet<String> = all().into_iter().map(|tile| tile.id).collect();
        let mut expected = HashSet::new();
        for suit in ["m", "p", "s"] {
            for rank in 1..=9 {
                expected.insert(format!("{}{}", suit, rank));
            }
        }
        for honor in 1..=7 {
            expected.insert(format!("z{}", honor));
        }
        for flower in 1..=8 {
            expected.insert(format!("f{}", flower));
        }
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_mapping_is_a_bijection() {
        let tiles = all();
        let ids: HashSet<&str> = tiles.iter().map(|tile| tile.id.as_str()).collect();
        let files: HashSet<&str> = tiles.iter().map(|tile| tile.file_name.as_str()).collect();
        assert_eq!(ids.len(), tiles.len());
        assert_eq!(files.len(), tiles.len());
    }

    #[test]
    fn test_insertion_order_is_suits_winds_dragons_flowers() {
        let tiles = all();
        assert_eq!(tiles[0].id, "m1");
        assert_eq!(tiles[8].id, "m9");
        assert_eq!(tiles[9].id, "p1");
        assert_eq!(tiles[18].id, "s1");
        assert_eq!(tiles[27].id, "z1");
        assert_eq!(tiles[34].id, "f1");
        assert_eq!(tiles[41].id, "f8");
    }

    #[test]
    fn test_dragon_numbering_is_reversed() {
        let tiles = all();
        let file_for = |id: &str| {
            tiles
                .iter()
                .find(|tile| tile.id == id)
                .map(|tile| tile.file_name.clone())
                .unwrap()
        };
        assert_eq!(file_for("z5"), "MJd3-.svg");
        assert_eq!(file_for("z6"), "MJd2-.svg");
        assert_eq!(file_for("z7"), "MJd1-.svg");
    }

    #[test]
    fn test_season_tiles_follow_flower_tiles() {
        let tiles = all();
        let file_for = |id: &str| {
            tiles
                .iter()
                .find(|tile| tile.id == id)
                .map(|tile| tile.file_name.clone())
                .unwrap()
        };
        assert_eq!(file_for("f1"), "MJh3-.svg");
        assert_eq!(file_for("f5"), "MJh1-.svg");
        assert_eq!(file_for("f8"), "MJh6-.svg");
    }
}
