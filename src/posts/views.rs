//! Server-rendered HTML pages.
//!
//! Each view is a plain function from data to an HTML string. User text is
//! always passed through [`escape_html`] before it is interpolated.

use std::fmt::Write as _;

use super::model::Post;
use crate::middleware::method_override;

/// Escape HTML special characters for safe inclusion in text and attributes.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <link rel=\"stylesheet\" href=\"/style.css\">\n\
         </head>\n\
         <body>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape_html(title),
    )
}

/// `GET /posts`
pub fn index(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Posts</h1>\n<a href=\"/posts/new\">Create new post</a>\n");
    for post in posts {
        let _ = write!(
            body,
            "<div class=\"post\">\n\
             <h3 class=\"user\">@{username}</h3>\n\
             <p class=\"content\">{content}</p>\n\
             <a href=\"/posts/{id}\">See in detail</a>\n\
             </div>\n",
            username = escape_html(&post.username),
            content = escape_html(&post.content),
            id = post.id,
        );
    }
    layout("Posts", &body)
}

/// `GET /posts/new`
pub fn new_form() -> String {
    layout(
        "New post",
        "<h1>Create a new post</h1>\n\
         <form method=\"POST\" action=\"/posts\">\n\
         <input type=\"text\" name=\"username\" placeholder=\"Enter username\">\n\
         <textarea name=\"content\" placeholder=\"Write your post\"></textarea>\n\
         <button>Submit</button>\n\
         </form>\n\
         <a href=\"/posts\">Back to posts</a>\n",
    )
}

/// `GET /posts/{id}`
pub fn show(post: &Post) -> String {
    let body = format!(
        "<h1>Post in detail</h1>\n\
         <div class=\"post\">\n\
         <h3 class=\"user\">@{username}</h3>\n\
         <p class=\"content\">{content}</p>\n\
         <a href=\"/posts/{id}/edit\">Edit</a>\n\
         <form method=\"POST\" action=\"/posts/{id}?{key}=DELETE\">\n\
         <button>Delete</button>\n\
         </form>\n\
         </div>\n\
         <a href=\"/posts\">Back to posts</a>\n",
        username = escape_html(&post.username),
        content = escape_html(&post.content),
        id = post.id,
        key = method_override::DEFAULT_KEY,
    );
    layout("Post", &body)
}

/// `GET /posts/{id}/edit`
pub fn edit_form(post: &Post) -> String {
    let body = format!(
        "<h1>Edit post</h1>\n\
         <h3 class=\"user\">@{username}</h3>\n\
         <form method=\"POST\" action=\"/posts/{id}?{key}=PATCH\">\n\
         <textarea name=\"content\">{content}</textarea>\n\
         <button>Update</button>\n\
         </form>\n\
         <a href=\"/posts\">Back to posts</a>\n",
        username = escape_html(&post.username),
        content = escape_html(&post.content),
        id = post.id,
        key = method_override::DEFAULT_KEY,
    );
    layout("Edit post", &body)
}

/// Rendered for an id that names no post.
pub fn not_found(id: &str) -> String {
    let body = format!(
        "<h1>Post not found</h1>\n\
         <p>No post has the id <code>{id}</code>.</p>\n\
         <a href=\"/posts\">Back to posts</a>\n",
        id = escape_html(id),
    );
    layout("Not found", &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::model::PostId;

    fn post(username: &str, content: &str) -> Post {
        Post { id: PostId::generate(), username: username.into(), content: content.into() }
    }

    #[test]
    fn escapes_markup_and_quotes() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn index_lists_posts_in_order_with_links() {
        let a = post("ada", "first");
        let b = post("bob", "second");
        let html = index(&[a.clone(), b.clone()]);

        let first = html.find("first").unwrap();
        let second = html.find("second").unwrap();
        assert!(first < second);
        assert!(html.contains(&format!("href=\"/posts/{}\"", a.id)));
        assert!(html.contains(&format!("href=\"/posts/{}\"", b.id)));
        assert!(html.contains("href=\"/posts/new\""));
    }

    #[test]
    fn user_text_is_escaped_everywhere() {
        let p = post("<b>eve</b>", "<script>alert(1)</script>");
        for html in [index(std::slice::from_ref(&p)), show(&p), edit_form(&p)] {
            assert!(!html.contains("<script>"));
            assert!(!html.contains("<b>eve"));
            assert!(html.contains("&lt;script&gt;"));
        }
        assert!(!not_found("<x>").contains("<x>"));
    }

    #[test]
    fn forms_target_the_override_routes() {
        let p = post("ada", "hi");
        assert!(show(&p).contains(&format!("action=\"/posts/{}?_method=DELETE\"", p.id)));
        assert!(edit_form(&p).contains(&format!("action=\"/posts/{}?_method=PATCH\"", p.id)));
        assert!(new_form().contains("action=\"/posts\""));
    }

    #[test]
    fn every_page_links_the_stylesheet() {
        let p = post("ada", "hi");
        let pages = [
            index(std::slice::from_ref(&p)),
            index(&[]),
            new_form(),
            show(&p),
            edit_form(&p),
            not_found("missing"),
        ];
        for html in pages {
            assert!(html.contains("<link rel=\"stylesheet\" href=\"/style.css\">"), "{html}");
        }
    }
}
