use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Team {
    #[path_param(name = "a")]
    #[path_param(name = "b")]
    id: String,
}

fn main() {}
