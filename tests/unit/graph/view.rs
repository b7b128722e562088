use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::graph::item::ItemId;

fn items(n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| Item::new(&format!("p{i}"), &format!("Project {i}")))
        .collect()
}

fn seeded() -> GraphConfig {
    GraphConfig {
        seed: Some(17),
        ..GraphConfig::default()
    }
}

#[derive(Default)]
struct Log {
    requested: u32,
    cancelled: Vec<FrameRequest>,
    detached: bool,
}

struct SharedScheduler(Rc<RefCell<Log>>);

impl FrameScheduler for SharedScheduler {
    fn request_frame(&mut self) -> FrameRequest {
        let mut log = self.0.borrow_mut();
        log.requested += 1;
        FrameRequest(u64::from(log.requested))
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        self.0.borrow_mut().cancelled.push(request);
    }

    fn detach_resize(&mut self) {
        self.0.borrow_mut().detached = true;
    }
}

#[test]
fn mount_seeds_and_schedules_a_frame() {
    let view = GraphView::mount(
        items(5),
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    assert_eq!(view.simulation().nodes().len(), 5);
    assert_eq!(view.pending_frame(), Some(FrameRequest(1)));
}

#[test]
fn each_frame_reschedules() {
    let mut view = GraphView::mount(
        items(3),
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    for _ in 0..3 {
        assert!(view.on_frame().is_some());
    }
    assert_eq!(view.scheduler().requested.len(), 4);
    assert_eq!(view.pending_frame(), Some(FrameRequest(4)));
    assert_eq!(view.simulation().frames(), 3);
}

#[test]
fn unmount_cancels_pending_frame_and_detaches() {
    let mut view = GraphView::mount(
        items(3),
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    view.on_frame();
    view.unmount();
    assert!(!view.is_mounted());
    assert_eq!(view.scheduler().cancelled, vec![FrameRequest(2)]);
    assert!(!view.scheduler().resize_attached);

    assert!(view.on_frame().is_none());
    assert!(!view.pointer_move(Point::new(0.0, 0.0)));
    assert!(view.resize(Viewport::new(100.0, 100.0)).is_none());
    assert_eq!(view.scheduler().requested.len(), 2);

    view.unmount();
    assert_eq!(view.scheduler().cancelled.len(), 1);
}

#[test]
fn drop_unmounts() {
    let log = Rc::new(RefCell::new(Log::default()));
    {
        let _view = GraphView::mount(
            items(2),
            Viewport::new(800.0, 350.0),
            seeded(),
            SharedScheduler(Rc::clone(&log)),
        );
    }
    let log = log.borrow();
    assert_eq!(log.cancelled, vec![FrameRequest(1)]);
    assert!(log.detached);
}

#[test]
fn touch_devices_ignore_synthetic_pointer_moves() {
    let cfg = GraphConfig {
        input: InputKind::Touch,
        ..seeded()
    };
    let mut view = GraphView::mount(
        items(3),
        Viewport::new(800.0, 350.0),
        cfg,
        ManualScheduler::default(),
    );
    let p = view.simulation().nodes()[0].position;
    assert!(!view.pointer_move(p));
    assert!(view.touch_start(p));
    assert_eq!(view.interaction().active(), Some(&ItemId::from("p0")));
    assert!(view.tooltip().is_some());
    assert!(!view.touch_end());
    assert!(view.touch_start(p));
    assert!(view.tooltip().is_none());
}

#[test]
fn removing_the_active_item_clears_it() {
    let mut view = GraphView::mount(
        items(3),
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    let p = view.simulation().nodes()[2].position;
    assert!(view.pointer_move(p));
    assert_eq!(view.set_items(items(2)), Some(ReseedReason::Items));
    assert_eq!(view.interaction().active(), None);
}

#[test]
fn coarse_resize_reseeds_and_switches_to_grid() {
    let mut view = GraphView::mount(
        items(4),
        Viewport::new(1024.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    assert_eq!(view.layout(), GraphLayout::Canvas);
    assert_eq!(view.resize(Viewport::new(1000.0, 350.0)), None);
    assert_eq!(
        view.resize(Viewport::new(360.0, 350.0)),
        Some(ReseedReason::Resize)
    );
    assert!(matches!(view.layout(), GraphLayout::Grid(cards) if cards.len() == 4));
}

#[test]
fn grid_layout_pauses_canvas_and_ignores_input() {
    let mut view = GraphView::mount(
        items(1),
        Viewport::new(360.0, 600.0),
        seeded(),
        ManualScheduler::default(),
    );
    assert!(matches!(view.layout(), GraphLayout::Grid(_)));
    assert_eq!(view.pending_frame(), None);
    assert!(view.scheduler().requested.is_empty());

    let p = view.simulation().nodes()[0].position;
    assert!(view.on_frame().is_none());
    assert_eq!(view.pending_frame(), None);
    assert_eq!(view.simulation().frames(), 0);

    assert!(!view.pointer_move(p));
    assert!(!view.touch_start(p));
    assert_eq!(view.interaction().active(), None);
    assert!(view.tooltip().is_none());
}

#[test]
fn crossing_the_grid_breakpoint_pauses_and_resumes_frames() {
    let mut view = GraphView::mount(
        items(3),
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    view.on_frame();
    let p = view.simulation().nodes()[0].position;
    assert!(view.pointer_move(p));

    view.resize(Viewport::new(400.0, 350.0));
    assert_eq!(view.interaction().active(), None);
    assert_eq!(view.pending_frame(), None);
    assert_eq!(view.scheduler().cancelled, vec![FrameRequest(2)]);
    assert!(view.on_frame().is_none());

    view.resize(Viewport::new(800.0, 350.0));
    assert_eq!(view.pending_frame(), Some(FrameRequest(3)));
    assert!(view.on_frame().is_some());
    assert_eq!(view.pending_frame(), Some(FrameRequest(4)));
}

#[test]
fn items_edited_under_same_ids_update_tooltip_and_label() {
    let mut view = GraphView::mount(
        vec![Item::new("a", "Alpha").with_tagline("old")],
        Viewport::new(800.0, 350.0),
        seeded(),
        ManualScheduler::default(),
    );
    assert_eq!(
        view.set_items(vec![Item::new("a", "Zeta").with_tagline("new")]),
        None
    );

    let p = view.simulation().nodes()[0].position;
    assert!(view.pointer_move(p));
    let tip = view.tooltip().unwrap();
    assert_eq!(tip.title, "Zeta");
    assert_eq!(tip.subtitle, "new");

    let scene = view.on_frame().unwrap();
    let labels: Vec<&str> = scene
        .ops
        .iter()
        .filter_map(|op| match op {
            crate::graph::scene::SceneOp::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert!(labels.contains(&"Z"));
    assert!(!labels.contains(&"A"));
}
