use std::path::PathBuf;

use ledpainter::{
    frame_view, ClickOutcome, ExportConfig, LedColor, Mode, Position, Rgb, Session,
};

fn scratch_path(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join("ledpainter_tests");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(format!("{}_{}.py", name, std::process::id()))
}

#[test]
fn author_and_export_a_two_frame_show() {
    let mut session = Session::new();

    for (x, y) in [(50.0, 50.0), (100.0, 50.0), (150.0, 50.0)] {
        session.click(Position::new(x, y));
    }
    assert_eq!(session.markers().len(), 3);

    session.add_frame();
    session.set_mode(Mode::Edit);

    let ClickOutcome::Picked(number) = session.click(Position::new(102.0, 48.0)) else {
        panic!("expected LED 2 to be picked");
    };
    assert_eq!(number, 2);
    assert!(session.submit_edit(Rgb::new(0, 0, 255).into()));

    // Re-picking LED 2 and cancelling keeps the blue it already has
    assert_eq!(session.click(Position::new(99.0, 52.0)), ClickOutcome::Picked(2));
    assert_eq!(session.cancel_edit(), Some(2));
    assert_eq!(session.frames().current().get(2), Some(&LedColor::new("#0000FF")));

    // A cancelled pick of an unset LED leaves nothing behind
    assert_eq!(session.click(Position::new(150.0, 55.0)), ClickOutcome::Picked(3));
    session.cancel_edit();
    assert!(!session.submit_edit(Rgb::new(255, 255, 255).into()));
    assert_eq!(session.frames().current().get(3), None);

    let view = frame_view(&session);
    assert_eq!(view[1].color, Rgb::new(0, 0, 255));
    assert_eq!(view[2].color, Rgb::new(0, 255, 0));

    let path = scratch_path("two_frames");
    let config = ExportConfig {
        output_path: path.clone(),
        ..ExportConfig::default()
    };
    let script = session.export(&config).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_eq!(written, script);

    assert!(script.contains("pixels = neopixel.NeoPixel(board.D18, 3, brightness=0.2)\n"));
    assert!(script.contains(
        "frames = [\n    {0: (0, 255, 0), 1: (0, 255, 0), 2: (0, 255, 0)},\n    {1: (0, 0, 255)},\n    ]\n"
    ));
    assert!(script.ends_with("        time.sleep(1)  # Adjust the delay as needed\n"));
}

#[test]
fn editing_a_frame_leaves_the_others_alone() {
    let mut session = Session::new();
    session.place_marker(Position::new(10.0, 10.0));
    session.place_marker(Position::new(60.0, 10.0));
    session.add_frame();
    session.set_color(1, LedColor::new("#FF0000"));

    session.prev_frame();
    assert_eq!(session.current_frame_index(), 0);
    assert!(!session.prev_frame());

    let frame0: Vec<(u32, &str)> = session
        .frames()
        .get(0)
        .unwrap()
        .iter()
        .map(|(n, c)| (n, c.as_str()))
        .collect();
    assert_eq!(frame0, vec![(1, "green"), (2, "green")]);

    let frame1: Vec<(u32, Rgb)> = session
        .frames()
        .get(1)
        .unwrap()
        .iter()
        .map(|(n, c)| (n, c.rgb()))
        .collect();
    assert_eq!(frame1, vec![(1, Rgb::new(255, 0, 0))]);

    session.next_frame();
    assert!(!session.next_frame());
    assert_eq!(session.current_frame_index(), 1);
}
