//! End-to-end widget flows against the in-memory surface.

use the_sifter::{
  FilterSet,
  Options,
  Properties,
  Sifter,
};
use the_sifter_surface::{
  Document,
  Interaction,
  Motion,
  Node,
  NodeId,
};

const CAMPSITES: &[(&str, &str)] = &[
  ("Bear Hollow", "name-bear capacity-4 type-tent"),
  ("Aspen Flat", "name-aspen capacity-6 type-cabin"),
  ("Creekside", "name-creek capacity-4 type-cabin"),
  ("Dune Rise", "name-dune capacity-2 type-tent"),
  ("Echo Bluff", "name-echo type-rv"),
  ("Fern Gully", "name-fern capacity-8 type-rv"),
];

struct Page {
  container: NodeId,
  items:     Vec<NodeId>,
  tents:     NodeId,
  cabins:    NodeId,
  search:    NodeId,
  by_name:   NodeId,
  reset:     NodeId,
  reverse:   NodeId,
  indicator: NodeId,
}

fn build(doc: &mut Document) -> Page {
  let container = doc.append(doc.root(), Node::element().id("campsites"));
  let list = doc.append(container, Node::element().class("sift-list"));
  let items = CAMPSITES
    .iter()
    .map(|&(label, meta)| {
      doc.append(
        list,
        Node::element()
          .class("sift-item")
          .label(label)
          .attr("data-sift", meta),
      )
    })
    .collect();

  let tents = doc.append(
    container,
    Node::checkbox(false)
      .attr("data-action", "filter")
      .attr("data-attribute", "type")
      .attr("data-value", "tent"),
  );
  let cabins = doc.append(
    container,
    Node::checkbox(false)
      .attr("data-action", "filter")
      .attr("data-attribute", "type")
      .attr("data-value", "cabin"),
  );
  let search = doc.append(
    container,
    Node::text_input()
      .attr("data-action", "filter")
      .attr("data-attribute", "name"),
  );
  let by_name = doc.append(
    container,
    Node::element()
      .label("name")
      .attr("data-action", "sort")
      .attr("data-attribute", "name"),
  );
  let reset = doc.append(
    container,
    Node::element().label("show all").attr("data-action", "reset"),
  );
  let reverse = doc.append(
    container,
    Node::element().label("flip").attr("data-action", "reverse"),
  );
  let indicator = doc.append(
    container,
    Node::element().label("no campsites match").attr("data-empty", "true"),
  );

  Page {
    container,
    items,
    tents,
    cabins,
    search,
    by_name,
    reset,
    reverse,
    indicator,
  }
}

fn visible_labels(doc: &Document, sifter: &Sifter) -> Vec<String> {
  let hidden = &sifter.config().hidden_class;
  doc
    .children(sifter.list())
    .iter()
    .filter(|&&node| !doc.has_class(node, hidden))
    .map(|&node| doc.label(node).to_string())
    .collect()
}

/// Pump frames until every position transition has landed.
fn settle(sifter: &mut Sifter, doc: &mut Document) {
  let mut frames = 0;
  while sifter.is_animating() {
    sifter.tick(doc, 1.0 / 60.0);
    frames += 1;
    assert!(frames < 10_000, "animation never settled");
  }
}

#[test]
fn test_filter_sort_reset_walkthrough() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  assert_eq!(visible_labels(&doc, &sifter).len(), 6);
  assert!(doc.has_class(page.reset, "is-active"));
  assert!(!doc.is_displayed(page.indicator));

  // Two checked boxes OR within the same attribute.
  sifter.handle_interaction(&mut doc, page.tents, &Interaction::Toggled(true));
  settle(&mut sifter, &mut doc);
  assert_eq!(visible_labels(&doc, &sifter), ["Bear Hollow", "Dune Rise"]);

  sifter.handle_interaction(&mut doc, page.cabins, &Interaction::Toggled(true));
  settle(&mut sifter, &mut doc);
  assert_eq!(
    visible_labels(&doc, &sifter),
    ["Bear Hollow", "Aspen Flat", "Creekside", "Dune Rise"]
  );
  assert!(!doc.has_class(page.reset, "is-active"));

  // Sorting by name reorders hidden items too, and decorates the
  // primary sort control's label.
  sifter.handle_interaction(&mut doc, page.by_name, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  assert_eq!(
    visible_labels(&doc, &sifter),
    ["Aspen Flat", "Bear Hollow", "Creekside", "Dune Rise"]
  );
  assert_eq!(doc.label(page.by_name), "name ▲");

  // Narrowing with free text ANDs across attributes.
  sifter.handle_interaction(&mut doc, page.search, &Interaction::Edited("creek".into()));
  settle(&mut sifter, &mut doc);
  assert_eq!(visible_labels(&doc, &sifter), ["Creekside"]);

  // Visible items settle exactly at their laid-out positions.
  for &node in &page.items {
    if let Some(rect) = doc.layout_rect(node) {
      assert_eq!(doc.measure(node), Some(rect));
    }
  }

  sifter.handle_interaction(&mut doc, page.reset, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  assert_eq!(visible_labels(&doc, &sifter).len(), 6);
  assert_eq!(doc.children(sifter.list()), page.items.as_slice());
  assert!(doc.has_class(page.reset, "is-active"));
  assert!(!doc.is_checked(page.tents));
  assert_eq!(doc.text_value(page.search), Some(""));
  assert_eq!(doc.label(page.by_name), "name");

  // Reverse is a full-order round trip.
  sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  let flipped: Vec<NodeId> = page.items.iter().rev().copied().collect();
  assert_eq!(doc.children(sifter.list()), flipped.as_slice());

  sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  assert_eq!(doc.children(sifter.list()), page.items.as_slice());
}

#[test]
fn test_search_keystrokes_replace_and_emptying_shows_all() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  // Typing letter by letter keeps exactly the live query active.
  for text in ["b", "be", "bea", "bear"] {
    sifter.handle_interaction(&mut doc, page.search, &Interaction::Edited(text.into()));
    settle(&mut sifter, &mut doc);
  }
  assert_eq!(visible_labels(&doc, &sifter), ["Bear Hollow"]);

  // Deleting back to an empty box drops the filter outright.
  for text in ["bea", "be", "b", ""] {
    sifter.handle_interaction(&mut doc, page.search, &Interaction::Edited(text.into()));
    settle(&mut sifter, &mut doc);
  }
  assert_eq!(visible_labels(&doc, &sifter).len(), 6);
  assert!(!doc.is_displayed(page.indicator));
}

#[test]
fn test_no_matches_shows_the_indicator() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  sifter.handle_interaction(&mut doc, page.search, &Interaction::Edited("zzz".into()));
  settle(&mut sifter, &mut doc);
  assert!(visible_labels(&doc, &sifter).is_empty());
  assert!(doc.is_displayed(page.indicator));

  sifter.handle_interaction(&mut doc, page.reset, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  assert!(!doc.is_displayed(page.indicator));
}

#[test]
fn test_reorder_flies_from_old_to_new_positions() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  let first = page.items[0];
  let before = doc.measure(first).unwrap();
  sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked);

  // Pinned at its old position the moment the mutation lands.
  assert!(sifter.is_animating());
  assert_eq!(doc.measure(first).unwrap().y, before.y);
  let resting = doc.layout_rect(first).unwrap();
  assert!(resting.y > before.y);

  // Monotonically approaches the new position, then settles.
  let mut last_y = doc.measure(first).unwrap().y;
  for _ in 0..5 {
    sifter.tick(&mut doc, 0.05);
    let y = doc.measure(first).unwrap().y;
    assert!(y >= last_y);
    last_y = y;
  }
  settle(&mut sifter, &mut doc);
  assert_eq!(doc.measure(first), Some(resting));
  assert_eq!(doc.offset(first), None);
  assert_eq!(doc.transition(first), None);
}

#[test]
fn test_mid_flight_mutation_continues_from_the_current_position() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked);
  for _ in 0..4 {
    sifter.tick(&mut doc, 0.02);
  }

  let first = page.items[0];
  let mid_flight = doc.measure(first).unwrap();
  sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked);

  // No jump: the new flight starts where the old one was interrupted.
  let after = doc.measure(first).unwrap();
  assert!((after.y - mid_flight.y).abs() < 0.001);

  settle(&mut sifter, &mut doc);
  assert_eq!(doc.children(sifter.list()), page.items.as_slice());
}

#[test]
fn test_defaults_document_restyles_the_widget() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let defaults = Options::from_toml(
    r#"
      hidden_class = "tucked-away"
      active_filter_class = "lit"
      enable_transitions = false
    "#,
  )
  .unwrap();
  let mut sifter = Sifter::attach(&mut doc, "#campsites", &defaults, &Options::new()).unwrap();

  sifter.handle_interaction(&mut doc, page.tents, &Interaction::Toggled(true));
  assert!(doc.has_class(page.items[1], "tucked-away"));
  assert!(!sifter.is_animating(), "transitions disabled by defaults");
  assert!(!doc.has_class(page.reset, "lit"));

  sifter.handle_interaction(&mut doc, page.reset, &Interaction::Clicked);
  assert!(doc.has_class(page.reset, "lit"));
}

#[test]
fn test_interactions_on_unbound_nodes_are_not_consumed() {
  let mut doc = Document::new();
  let page = build(&mut doc);
  let stray = doc.append(page.container, Node::element().label("decoration"));
  let mut sifter =
    Sifter::new(&mut doc, page.container, &Options::new(), &Options::new()).unwrap();

  assert!(!sifter.handle_interaction(&mut doc, stray, &Interaction::Clicked));
  assert!(sifter.handle_interaction(&mut doc, page.reverse, &Interaction::Clicked));
}

quickcheck::quickcheck! {
    fn prop_property_parsing_never_panics(raw: String) -> bool {
        let _ = Properties::parse(Some(&raw));
        true
    }

    fn prop_reverse_twice_is_identity(mask: Vec<bool>) -> bool {
        let mut doc = Document::new();
        let container = doc.append(doc.root(), Node::element());
        let list = doc.append(container, Node::element().class("sift-list"));
        for (i, hidden) in mask.iter().enumerate() {
            let mut item = Node::element().class("sift-item").label(format!("site {i}"));
            if *hidden {
                item = item.class("is-hidden");
            }
            doc.append(list, item);
        }
        let quiet = Options::new().enable_transitions(false);
        let mut sifter = Sifter::new(&mut doc, container, &Options::new(), &quiet).unwrap();

        let before = sifter.order();
        sifter.reverse(&mut doc);
        sifter.reverse(&mut doc);
        before == sifter.order() && before.as_slice() == doc.children(sifter.list())
    }

    fn prop_exclusive_adds_leave_one_value(values: Vec<String>) -> bool {
        let mut filters = FilterSet::new();
        for value in &values {
            filters.add("type", value, true);
        }
        match values.last() {
            Some(last) => filters.is_active("type", last),
            None => filters.is_empty(),
        }
    }
}
