use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Team {
    #[path_param(rename)]
    id: String,
}

fn main() {}
