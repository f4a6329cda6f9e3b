use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Team {
    #[path_param(name = "")]
    id: String,
}

fn main() {}
