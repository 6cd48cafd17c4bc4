use super::{hooks::save_with_hooks, prelude::*};

#[rustfmt::skip]
#[derive(Debug, Clone)]
pub struct NewPerson {
    pub first : String,
    pub last  : String,
}

pub fn save_person<R, H>(repo: &R, hooks: &H, p: NewPerson) -> Result<Person>
where
    R: PersonRepository,
    H: SaveHooks<Person>,
{
    let NewPerson { first, last } = p;
    let person = Person {
        id: Id::new(),
        first,
        last,
    };
    let person = save_with_hooks(hooks, person, |p| repo.create_or_update_person(p))?;
    Ok(person)
}
