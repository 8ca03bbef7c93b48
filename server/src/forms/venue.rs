use super::{FormError, FormFields};
use crate::models::VenueInput;

impl TryFrom<FormFields> for VenueInput {
    type Error = FormError;

    fn try_from(form: FormFields) -> Result<Self, Self::Error> {
        Ok(VenueInput {
            name: form.required("name")?,
            city: form.required("city")?,
            state: form.state()?,
            address: form.required("address")?,
            phone: form.optional("phone")?,
            genres: form.genres()?,
            facebook_link: form.link("facebook_link")?,
            image_link: form.link("image_link")?,
            website_link: form.link("website_link")?,
            seeking_talent: form.flag("seeking_talent"),
            seeking_description: form.text("seeking_description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields;

    #[test]
    fn test_full_venue_form() {
        let form = fields(&[
            ("name", "The Musical Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("address", "1015 Folsom Street"),
            ("phone", "123-123-1234"),
            ("genres", "Jazz"),
            ("genres", "Reggae"),
            ("facebook_link", "https://www.facebook.com/TheMusicalHop"),
            ("seeking_talent", "y"),
            ("seeking_description", "We are on the lookout for a local artist"),
        ]);

        let venue = VenueInput::try_from(form).unwrap();
        assert_eq!(venue.name, "The Musical Hop");
        assert_eq!(venue.genres, vec!["Jazz", "Reggae"]);
        assert!(venue.seeking_talent);
        assert_eq!(venue.website_link, None);
        assert_eq!(venue.image_link, None);
    }

    #[test]
    fn test_venue_requires_address() {
        let form = fields(&[
            ("name", "Hop"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Jazz"),
        ]);
        assert_eq!(VenueInput::try_from(form), Err(FormError::Missing("address")));
    }
}
