mod common;

use std::sync::Arc;

use common::{camera_at, drawn_meshes, recording_painter, red, Event};
use painter3d::{CubeFace, PainterError, Skybox};

fn fully_requested() -> Arc<Skybox> {
    let skybox = Arc::new(Skybox::new());
    for face in CubeFace::ALL {
        skybox.request(face);
    }
    skybox
}

fn skybox_events(log: &common::EventLog) -> usize {
    log.borrow()
        .iter()
        .filter(|e| matches!(e, Event::Skybox { .. }))
        .count()
}

#[test]
fn loaded_skybox_is_drawn_after_geometry() {
    let (mut painter, log) = recording_painter();
    let skybox = fully_requested();
    for face in CubeFace::ALL {
        skybox.store_face(face, vec![1, 2, 3]);
    }
    let camera = camera_at(4.0);
    painter.set_camera(camera);
    painter.set_skybox(Some(skybox));
    painter.begin().unwrap();
    painter.draw(&red(0)).unwrap();

    let stats = painter.end().unwrap();

    assert!(stats.skybox_drawn);
    let events = log.borrow();
    let n = events.len();
    assert_eq!(events[n - 2], Event::Skybox { eye: camera.eye });
    assert_eq!(events[n - 1], Event::ContextEnd);
    assert!(matches!(events[n - 3], Event::Deactivate { .. }));
}

#[test]
fn partially_requested_skybox_fails_end() {
    let (mut painter, log) = recording_painter();
    let skybox = Arc::new(Skybox::new());
    for face in &CubeFace::ALL[..5] {
        skybox.store_face(*face, Vec::new());
    }
    painter.set_camera(camera_at(4.0));
    painter.set_skybox(Some(skybox));
    painter.begin().unwrap();
    painter.draw(&red(0)).unwrap();

    let err = painter.end().unwrap_err();

    assert!(matches!(err, PainterError::Precondition(_)));
    // Geometry was flushed before the check; the frame is still open.
    assert_eq!(drawn_meshes(&log), vec![0]);
    assert!(painter.is_rendering());
    assert_eq!(skybox_events(&log), 0);
    assert!(!log.borrow().contains(&Event::ContextEnd));

    painter.set_skybox(None);
    painter.end().unwrap();
    assert!(!painter.is_rendering());
}

#[test]
fn requested_but_unloaded_skybox_is_skipped() {
    let (mut painter, log) = recording_painter();
    painter.set_camera(camera_at(4.0));
    painter.set_skybox(Some(fully_requested()));
    painter.begin().unwrap();

    let stats = painter.end().unwrap();

    assert!(!stats.skybox_drawn);
    assert_eq!(skybox_events(&log), 0);
    assert_eq!(log.borrow().last(), Some(&Event::ContextEnd));
}

#[test]
fn load_status_is_rechecked_every_frame() {
    let (mut painter, log) = recording_painter();
    let skybox = fully_requested();
    painter.set_camera(camera_at(4.0));
    painter.set_skybox(Some(Arc::clone(&skybox)));

    painter.begin().unwrap();
    painter.end().unwrap();
    assert_eq!(skybox_events(&log), 0);

    for face in CubeFace::ALL {
        skybox.store_face(face, vec![0]);
    }
    painter.begin().unwrap();
    painter.end().unwrap();
    assert_eq!(skybox_events(&log), 1);
}
