use super::*;

impl<'a> PersonRepository for DbReadWrite<'a> {
    fn create_or_update_person(&self, person: Person) -> Result<()> {
        create_or_replace(&mut self.store.borrow_mut().people, person);
        Ok(())
    }
    fn load_person(&self, id: &str) -> Result<Person> {
        get(&self.store.borrow().people, id)
    }
    fn all_people(&self) -> Result<Vec<Person>> {
        Ok(self.store.borrow().people.clone())
    }
}

impl<'a> PersonRepository for DbReadOnly<'a> {
    fn create_or_update_person(&self, _person: Person) -> Result<()> {
        Err(RepoError::ReadOnly)
    }
    fn load_person(&self, id: &str) -> Result<Person> {
        get(&self.store.people, id)
    }
    fn all_people(&self) -> Result<Vec<Person>> {
        Ok(self.store.people.clone())
    }
}
