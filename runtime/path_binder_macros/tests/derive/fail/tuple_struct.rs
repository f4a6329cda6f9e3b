use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Pair(String, String);

fn main() {}
