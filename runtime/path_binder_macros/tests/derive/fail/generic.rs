use path_binder::BindTarget;

#[derive(BindTarget)]
pub struct Team<T> {
    #[path_param]
    id: T,
}

fn main() {}
