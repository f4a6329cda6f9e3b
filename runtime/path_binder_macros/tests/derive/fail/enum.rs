use path_binder::BindTarget;

#[derive(BindTarget)]
pub enum Route {
    Home,
    About,
}

fn main() {}
