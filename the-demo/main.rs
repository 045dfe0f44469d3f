//! Proof-of-life walkthrough for the-sifter.
//!
//! Builds a campsite gallery on the in-memory surface and drives it through
//! the full widget surface:
//! - Filtering from checkbox and text controls
//! - Sorting from a dedicated control and from an attribute picker
//! - Reverse and reset
//! - Position transitions pumped at a fixed frame rate

use anyhow::Result;
use the_sifter::{
  Options,
  Sifter,
};
use the_sifter_surface::{
  Document,
  Interaction,
  Node,
  NodeId,
};

const FRAME: f32 = 1.0 / 60.0;

const CAMPSITES: &[(&str, &str)] = &[
  ("Bear Hollow", "name-bear capacity-4 type-tent"),
  ("Aspen Flat", "name-aspen capacity-6 type-cabin"),
  ("Creekside", "name-creek capacity-4 type-cabin"),
  ("Dune Rise", "name-dune capacity-2 type-tent"),
  ("Echo Bluff", "name-echo type-rv"),
  ("Fern Gully", "name-fern capacity-8 type-rv"),
];

struct Controls {
  tents:   NodeId,
  cabins:  NodeId,
  search:  NodeId,
  by_name: NodeId,
  picker:  NodeId,
  reverse: NodeId,
  reset:   NodeId,
}

fn build_page(doc: &mut Document) -> Controls {
  let container = doc.append(doc.root(), Node::element().id("campsites"));
  let list = doc.append(container, Node::element().class("sift-list"));
  for &(label, meta) in CAMPSITES {
    doc.append(
      list,
      Node::element()
        .class("sift-item")
        .label(label)
        .attr("data-sift", meta),
    );
  }

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
  // No configured attribute: the select acts as a sort-attribute picker.
  let picker = doc.append(
    container,
    Node::select(["name", "capacity"]).attr("data-action", "sort"),
  );
  let reverse = doc.append(
    container,
    Node::element().label("flip").attr("data-action", "reverse"),
  );
  let reset = doc.append(
    container,
    Node::element().label("show all").attr("data-action", "reset"),
  );
  doc.append(
    container,
    Node::element().label("no campsites match").attr("data-empty", "true"),
  );

  Controls {
    tents,
    cabins,
    search,
    by_name,
    picker,
    reverse,
    reset,
  }
}

/// Pump frames until every position transition has landed.
fn settle(sifter: &mut Sifter, doc: &mut Document) {
  let mut frames = 0;
  while sifter.is_animating() {
    sifter.tick(doc, FRAME);
    frames += 1;
  }
  log::debug!("settled after {frames} frames");
}

fn show(doc: &Document, sifter: &Sifter, step: &str) {
  println!("{step}:");
  for &node in doc.children(sifter.list()) {
    if !doc.has_class(node, &sifter.config().hidden_class) {
      println!("  {}", doc.label(node));
    }
  }
  println!();
}

fn main() -> Result<()> {
  env_logger::init();

  let mut doc = Document::new();
  let controls = build_page(&mut doc);

  // Instance options layer over host defaults, which layer over the
  // built-ins; the toml path takes the same shape.
  let defaults = Options::from_toml("transition_duration = 200")?;
  let mut sifter = Sifter::attach(&mut doc, "#campsites", &defaults, &Options::new())?;
  show(&doc, &sifter, "campsites as authored");

  sifter.handle_interaction(&mut doc, controls.tents, &Interaction::Toggled(true));
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "tents checked");

  sifter.handle_interaction(&mut doc, controls.cabins, &Interaction::Toggled(true));
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "tents or cabins");

  sifter.handle_interaction(&mut doc, controls.search, &Interaction::Edited("creek".into()));
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "tents or cabins, named creek");

  sifter.handle_interaction(&mut doc, controls.reset, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "reset");

  sifter.handle_interaction(&mut doc, controls.by_name, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, doc.label(controls.by_name));

  sifter.handle_interaction(&mut doc, controls.by_name, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, doc.label(controls.by_name));

  // Campsites without a capacity sort behind the ones that have one.
  sifter.handle_interaction(&mut doc, controls.picker, &Interaction::Picked(1));
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "picked capacity");

  sifter.handle_interaction(&mut doc, controls.reverse, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "flipped");

  sifter.handle_interaction(&mut doc, controls.reset, &Interaction::Clicked);
  settle(&mut sifter, &mut doc);
  show(&doc, &sifter, "reset again");

  Ok(())
}
