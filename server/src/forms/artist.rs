use super::{FormError, FormFields};
use crate::models::ArtistInput;

impl TryFrom<FormFields> for ArtistInput {
    type Error = FormError;

    fn try_from(form: FormFields) -> Result<Self, Self::Error> {
        Ok(ArtistInput {
            name: form.required("name")?,
            city: form.required("city")?,
            state: form.state()?,
            phone: form.optional("phone")?,
            genres: form.genres()?,
            facebook_link: form.link("facebook_link")?,
            image_link: form.link("image_link")?,
            website_link: form.link("website_link")?,
            seeking_venue: form.flag("seeking_venue"),
            seeking_description: form.text("seeking_description"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields;

    #[test]
    fn test_omitted_optionals_are_cleared() {
        let form = fields(&[
            ("name", "Guns N Petals"),
            ("city", "San Francisco"),
            ("state", "CA"),
            ("genres", "Rock n Roll"),
        ]);

        let artist = ArtistInput::try_from(form).unwrap();
        assert_eq!(artist.phone, None);
        assert_eq!(artist.seeking_description, None);
        assert!(!artist.seeking_venue);
    }
}
