//! Built-in D2 snippets, in the order they are advertised.

pub const BASIC: &str = r#"# Basic D2 Diagram
x -> y: hello world"#;

pub const NETWORK: &str = r#"# Network Diagram
network: {
  cell tower: {
    satellites: {
      shape: stored_data
      style.multiple: true
    }

    transmitter

    satellites -> transmitter: send
    satellites -> transmitter: send
    satellites -> transmitter: send
  }

  online portal: {
    ui: {shape: hexagon}
  }

  data processor: {
    storage: {
      shape: cylinder
      style.multiple: true
    }
  }

  cell tower.transmitter -> data processor.storage: phone logs
}

user: {
  shape: person
  width: 130
}

user -> network.cell tower: make call
user -> network.online portal.ui: access {
  style.stroke-dash: 3
}

api server -> network.online portal.ui: display
api server -> logs: persist
logs: {shape: page; style.multiple: true}

network.data processor -> api server"#;

pub const SKETCH: &str = r#"# Sketch Mode Example
vars: {
  d2-config: {
    sketch: true
  }
}

Preprocessing -> Multi-GPU -> Training -> Eval -> Inference
Orchestrator -> "Data Warehouse" -> "Processing Pipeline": Note: we can replace the orchestrator with Kubernetes when we run out of things to do

"Full working pipeline": {
  style.fill: green
  style.opacity: 0.5
  style.border-radius: 10
  label: Primary
}"#;

pub const SQL: &str = r#"# SQL Table Example
users: {
  shape: sql_table
  id: int {constraint: primary_key}
  name: varchar
  email: varchar
  age: int
  created_at: timestamp
}

posts: {
  shape: sql_table
  id: int {constraint: primary_key}
  title: varchar
  content: text
  user_id: int {constraint: foreign_key}
  created_at: timestamp
}

users.id <- posts.user_id"#;

pub const VARIABLES: &str = r#"# Variables Example
vars: {
  color: aquamarine
  border_width: 2
  highlight_color: orange
}

x.style.fill: ${color}
x.style.stroke-width: ${border_width}

y.style.fill: ${highlight_color}
y.style.stroke-width: ${border_width}

x -> y: connection"#;

pub const GLOBS: &str = r#"# Globs Example
x
y
z

*.style.fill: aquamarine
*: {&shape: circle; style.fill: orange}

x -> y -> z

*->*: {style.stroke: blue; style.stroke-dash: 5}"#;

pub const ANIMATED: &str = r#"# Animated Connection Example
vars: {
  d2-config: {
    sketch: true
  }
}
winter.snow -> summer.sun -> trees -> winter.snow: {style.animated: true}"#;

/// Every snippet keyed by the name clients ask for.
pub const EXAMPLES: &[(&str, &str)] = &[
    ("basic", BASIC),
    ("network", NETWORK),
    ("sketch", SKETCH),
    ("sql", SQL),
    ("variables", VARIABLES),
    ("globs", GLOBS),
    ("animated", ANIMATED),
];
