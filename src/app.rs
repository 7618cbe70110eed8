use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::auth::{ProtectedRoute, provide_auth_context};
use crate::ui::pages::{
    AddMoviePage, AdminDashboardPage, EditMoviePage, HomePage, LoginPage, MovieDetailsPage,
    MoviesPage, MyReviewsPage, NotFoundPage, ProfilePage, RegisterPage, SearchPage,
};
use crate::ui::{Footer, Navbar};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Session restore + login/logout state for the whole tree.
    let _auth = provide_auth_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/moviereview.css"/>

        // sets the document title
        <Title text="MovieReview - Rate and Review Movies"/>

        <Router>
            <div class="min-h-screen flex flex-col bg-theme-secondary">
                <Navbar/>
                <main class="flex-1 max-w-7xl w-full mx-auto px-4 sm:px-6 lg:px-8 py-8">
                    <Routes fallback=NotFoundPage>
                        // Public
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/movies") view=MoviesPage/>
                        <Route path=path!("/movies/:id") view=MovieDetailsPage/>
                        <Route path=path!("/search") view=SearchPage/>

                        // Signed-in users only
                        <Route
                            path=path!("/profile")
                            view=|| view! {
                                <ProtectedRoute>
                                    <ProfilePage/>
                                </ProtectedRoute>
                            }
                        />
                        <Route
                            path=path!("/my-reviews")
                            view=|| view! {
                                <ProtectedRoute>
                                    <MyReviewsPage/>
                                </ProtectedRoute>
                            }
                        />

                        // Admin only
                        <Route
                            path=path!("/admin/dashboard")
                            view=|| view! {
                                <ProtectedRoute require_admin=true>
                                    <AdminDashboardPage/>
                                </ProtectedRoute>
                            }
                        />
                        <Route
                            path=path!("/admin/movies/add")
                            view=|| view! {
                                <ProtectedRoute require_admin=true>
                                    <AddMoviePage/>
                                </ProtectedRoute>
                            }
                        />
                        <Route
                            path=path!("/admin/movies/edit/:id")
                            view=|| view! {
                                <ProtectedRoute require_admin=true>
                                    <EditMoviePage/>
                                </ProtectedRoute>
                            }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
