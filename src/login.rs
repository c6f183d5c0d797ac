//! Interactive OAuth user login, the alternate credential source.
//!
//! Instead of an application credential minted by the app's backend, a map
//! app can send the user through the portal's OAuth sign-in page and work
//! with a user-identity credential. The redirect dance itself is handled by
//! the mapping SDK; this module only builds the authorization URL the app
//! navigates to.

use url::Url;

/// Build the authorization URL for the portal's interactive sign-in page.
///
/// `portal_base` is the portal's sharing root, e.g.
/// "https://www.arcgis.com/sharing". The user lands on `redirect_uri` with
/// the credential attached once sign-in completes.
pub fn authorization_url(portal_base: &Url, client_id: &str, redirect_uri: &Url) -> Url {
    let mut authorize_url = portal_base.clone();
    authorize_url
        .path_segments_mut()
        .expect("no cannot-be-a-base url")
        .extend(&["rest", "oauth2", "authorize"]);
    authorize_url
        .query_pairs_mut()
        .append_pair("client_id", client_id)
        .append_pair("response_type", "token")
        .append_pair("redirect_uri", redirect_uri.as_str());
    authorize_url
}
