use std::path::PathBuf;

use richmenu::{FontLocator, MenuConfig, MenuError, generate_menus};

fn run_dir(name: &str) -> PathBuf {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let dir = PathBuf::from("target").join("pipeline_run").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn missing_font_aborts_before_any_output() {
    let dir = run_dir("missing_font");
    let locator = FontLocator {
        candidates: vec![dir.join("no-such-font.ttc")],
        secondary: dir.join("no-such-latin.ttf"),
    };

    // The driver resolves fonts before compositing; the load error is the
    // abort point and nothing may be written.
    let err = locator.load().unwrap_err();
    assert!(matches!(err, MenuError::FontNotFound(_)));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn unusable_font_bytes_abort_before_any_output() {
    let dir = run_dir("bad_font_bytes");
    let fonts = richmenu::FontSet {
        primary: vec![0u8; 4],
        secondary: vec![0u8; 4],
        primary_path: dir.join("fake.ttc"),
        secondary_path: dir.join("fake.ttf"),
    };

    // Font registration happens once, up front; bytes that yield no
    // family fail the whole run instead of each scheme.
    let err = generate_menus(&MenuConfig::default(), &fonts, &dir).unwrap_err();
    assert!(matches!(err, MenuError::Render(_)));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}

#[test]
fn full_run_produces_four_valid_pngs() {
    let Ok(fonts) = FontLocator::default().load() else {
        eprintln!("skipping: host has no CJK font");
        return;
    };
    let dir = run_dir("full");
    let config = MenuConfig::default();

    let summary = generate_menus(&config, &fonts, &dir).unwrap();
    assert_eq!(summary.produced.len(), 4);
    assert!(summary.failed.is_empty());

    for name in ["purple", "green", "blue", "dark"] {
        let path = dir.join(format!("richmenu_{name}.png"));
        assert!(path.exists(), "missing {}", path.display());
        let (w, h) = image::image_dimensions(&path).unwrap();
        assert_eq!((w, h), (2500, 1686));
    }
}

#[test]
fn reruns_are_byte_identical() {
    let Ok(fonts) = FontLocator::default().load() else {
        eprintln!("skipping: host has no CJK font");
        return;
    };
    let config = MenuConfig::default();

    let dir_a = run_dir("idempotent_a");
    let dir_b = run_dir("idempotent_b");
    generate_menus(&config, &fonts, &dir_a).unwrap();
    generate_menus(&config, &fonts, &dir_b).unwrap();

    for scheme in &config.schemes {
        let name = config.output_filename(scheme);
        let a = std::fs::read(dir_a.join(&name)).unwrap();
        let b = std::fs::read(dir_b.join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn unwritable_target_skips_the_scheme_and_continues() {
    let Ok(fonts) = FontLocator::default().load() else {
        eprintln!("skipping: host has no CJK font");
        return;
    };
    let mut config = MenuConfig::default();
    // Two schemes keep the test cheap; a slash in the name makes the
    // second target path invalid while the first stays writable.
    config.schemes.truncate(2);
    config.schemes[1].name = "bad/name".to_string();

    let dir = run_dir("partial");
    let summary = generate_menus(&config, &fonts, &dir).unwrap();

    assert_eq!(summary.produced.len(), 1);
    assert_eq!(summary.failed.len(), 1);
    assert_eq!(summary.produced[0].scheme, "purple");
    assert!(matches!(summary.failed[0].1, MenuError::Encode(_)));
    assert!(dir.join("richmenu_purple.png").exists());
}

#[test]
fn invalid_layout_is_rejected_up_front() {
    let dir = run_dir("invalid_layout");
    // generate_menus validates before compositing, so the validation error
    // must surface even when the "fonts" are garbage bytes.
    let mut config = MenuConfig::default();
    config.buttons.pop();

    let fonts = richmenu::FontSet {
        primary: vec![0u8; 4],
        secondary: vec![0u8; 4],
        primary_path: dir.join("fake.ttc"),
        secondary_path: dir.join("fake.ttf"),
    };
    let err = generate_menus(&config, &fonts, &dir).unwrap_err();
    assert!(matches!(err, MenuError::Validation(_)));
    assert_eq!(std::fs::read_dir(&dir).unwrap().count(), 0);
}
