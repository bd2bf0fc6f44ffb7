use std::path::PathBuf;

use richmenu::{FontLocator, MenuError};

fn synthetic_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join("font_locator").join(name);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn first_existing_candidate_wins() {
    let dir = synthetic_dir("third_exists");
    let third = dir.join("c.ttc");
    std::fs::write(&third, b"not really a font").unwrap();

    let locator = FontLocator {
        candidates: vec![dir.join("a.ttc"), dir.join("b.ttc"), third.clone()],
        secondary: dir.join("latin.ttf"),
    };
    assert_eq!(locator.locate_primary(), Some(third.as_path()));
}

#[test]
fn earlier_candidate_shadows_later_ones() {
    let dir = synthetic_dir("two_exist");
    let second = dir.join("b.ttc");
    let fourth = dir.join("d.ttc");
    std::fs::write(&second, b"x").unwrap();
    std::fs::write(&fourth, b"x").unwrap();

    let locator = FontLocator {
        candidates: vec![dir.join("a.ttc"), second.clone(), dir.join("c.ttc"), fourth],
        secondary: dir.join("latin.ttf"),
    };
    assert_eq!(locator.locate_primary(), Some(second.as_path()));
}

#[test]
fn no_candidate_means_none_and_fatal_load_error() {
    let dir = synthetic_dir("none_exist");
    let locator = FontLocator {
        candidates: vec![dir.join("a.ttc"), dir.join("b.ttc")],
        secondary: dir.join("latin.ttf"),
    };
    assert_eq!(locator.locate_primary(), None);

    let err = locator.load().unwrap_err();
    assert!(matches!(err, MenuError::FontNotFound(_)));
    assert!(err.is_fatal());
    assert!(err.to_string().contains("fonts-noto-cjk"));
}

#[test]
fn default_candidate_order_matches_the_documented_list() {
    let locator = FontLocator::default();
    assert_eq!(locator.candidates.len(), 10);
    assert_eq!(
        locator.candidates[0],
        PathBuf::from("/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc")
    );
    assert_eq!(
        locator.secondary,
        PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf")
    );
}
