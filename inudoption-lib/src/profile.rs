use std::fmt::{self, Formatter};

use derive_more::{Display, From, Into};

/// Identifier of a [`Profile`], unique within a [`Stack`](crate::Stack).
#[derive(
    Debug,
    Display,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    From,
    Into,
)]
pub struct ProfileId(i32);

impl ProfileId {
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

/// A person (and their dog) that can be swiped on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Profile {
    id: ProfileId,
    first_name: String,
    second_name: String,
    age: u32,
    mutual_friends: u32,
    image_ref: String,
    occupation: String,
}

impl Profile {
    pub fn new(
        id: impl Into<ProfileId>,
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        age: u32,
        mutual_friends: u32,
        image_ref: impl Into<String>,
        occupation: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            second_name: second_name.into(),
            age,
            mutual_friends,
            image_ref: image_ref.into(),
            occupation: occupation.into(),
        }
    }

    /// The fixed set of profiles every session starts with.
    pub fn seed() -> Vec<Self> {
        (0..5)
            .map(|id| Self::new(id, "Michael", id.to_string(), 27, 0, "michael", "Judge"))
            .collect()
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn mutual_friends(&self) -> u32 {
        self.mutual_friends
    }

    /// Opaque key of the portrait in the asset store.
    pub fn image_ref(&self) -> &str {
        &self.image_ref
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    /// Title line shown on the card, e.g. `Michael 0, 27`.
    pub fn headline(&self) -> String {
        format!("{} {}, {}", self.first_name, self.second_name, self.age)
    }

    pub fn mutual_friends_caption(&self) -> String {
        format!("{} Mutual Friends", self.mutual_friends)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}, id: {}", self.first_name, self.id)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_seed() {
        let seed = Profile::seed();

        let ids: Vec<i32> = seed.iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4]);

        let third = seed.get(2).unwrap();
        assert_eq!(third.first_name(), "Michael");
        assert_eq!(third.second_name(), "2");
        assert_eq!(third.age(), 27);
        assert_eq!(third.mutual_friends(), 0);
        assert_eq!(third.image_ref(), "michael");
        assert_eq!(third.occupation(), "Judge");
    }

    #[test]
    fn test_display() {
        let profile = Profile::new(3, "Rex", "Barker", 4, 12, "rex", "Good boy");

        assert_eq!(profile.to_string(), "Rex, id: 3");
        assert_eq!(profile.headline(), "Rex Barker, 4");
        assert_eq!(profile.mutual_friends_caption(), "12 Mutual Friends");
    }
}
