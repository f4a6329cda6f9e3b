use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Team<'a> {
    #[path_param]
    id: &'a str,
}

fn main() {}
